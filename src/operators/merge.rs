//! Merge neighborhood, the inverse of split.

use crate::solution::Solution;
use rand::Rng;

use super::pick_two_routes;

/// Append a random second-echelon route onto another one and drop the
/// emptied route. No-op with fewer than two routes.
pub fn merge<R: Rng + ?Sized>(solution: &Solution, rng: &mut R) -> Solution {
    let mut candidate = solution.clone();
    let routes = &mut candidate.second_echelon;

    let Some((head, tail)) = pick_two_routes(routes.len(), rng) else {
        return candidate;
    };

    let tail_nodes = std::mem::take(&mut routes[tail].nodes);
    routes[head].nodes.extend(tail_nodes);
    routes.remove(tail);

    candidate
}
