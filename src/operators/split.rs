//! Split neighborhood: cut a route in two.

use crate::solution::{Route, Solution};
use rand::Rng;

/// Pick a random second-echelon route with at least two customers and
/// replace it by its prefix and suffix around a random cut point in
/// `1..len`. The two new routes are appended at the end.
pub fn split<R: Rng + ?Sized>(solution: &Solution, rng: &mut R) -> Solution {
    let mut candidate = solution.clone();
    let routes = &mut candidate.second_echelon;

    if routes.is_empty() {
        return candidate;
    }

    let idx = rng.gen_range(0..routes.len());
    if routes[idx].len() < 2 {
        return candidate;
    }

    let split_point = rng.gen_range(1..routes[idx].len());
    let mut prefix = routes.remove(idx);
    let suffix = Route {
        nodes: prefix.nodes.split_off(split_point),
    };

    routes.push(prefix);
    routes.push(suffix);

    candidate
}
