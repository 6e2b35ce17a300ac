//! Swap neighborhood: exchange customers between two routes.

use crate::solution::Solution;
use rand::Rng;

use super::pick_two_routes;

/// Pick two distinct second-echelon routes and exchange one random customer
/// of each. No-op with fewer than two routes or when either pick is empty.
pub fn swap<R: Rng + ?Sized>(solution: &Solution, rng: &mut R) -> Solution {
    let mut candidate = solution.clone();
    let routes = &mut candidate.second_echelon;

    let Some((r1, r2)) = pick_two_routes(routes.len(), rng) else {
        return candidate;
    };
    if routes[r1].is_empty() || routes[r2].is_empty() {
        return candidate;
    }

    let c1_pos = rng.gen_range(0..routes[r1].len());
    let c2_pos = rng.gen_range(0..routes[r2].len());

    let customer1 = std::mem::take(&mut routes[r1].nodes[c1_pos]);
    let customer2 = std::mem::replace(&mut routes[r2].nodes[c2_pos], customer1);
    routes[r1].nodes[c1_pos] = customer2;

    candidate
}
