//! Relocate neighborhood: a one-customer destroy/repair move.

use crate::solution::Solution;
use rand::Rng;

use super::pick_two_routes;

/// Remove a random customer from one route and insert it at a random
/// position of another. A source route left empty is dropped, freeing its
/// vehicle.
pub fn relocate<R: Rng + ?Sized>(solution: &Solution, rng: &mut R) -> Solution {
    let mut candidate = solution.clone();
    let routes = &mut candidate.second_echelon;

    let Some((source, target)) = pick_two_routes(routes.len(), rng) else {
        return candidate;
    };
    if routes[source].is_empty() {
        return candidate;
    }

    let from = rng.gen_range(0..routes[source].len());
    let customer = routes[source].nodes.remove(from);

    let to = rng.gen_range(0..=routes[target].len());
    routes[target].nodes.insert(to, customer);

    if routes[source].is_empty() {
        routes.remove(source);
    }

    candidate
}
