//! Construction of the starting population.

use crate::error::Result;
use crate::problem::Problem;
use crate::solution::{Route, Solution};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Build `size` starting solutions.
///
/// With a seed solution every member is a copy of it. Otherwise the first
/// member packs customers in instance order and the others in a shuffled
/// order, so the population is diverse.
pub fn initial_population<R: Rng + ?Sized>(
    problem: &Problem,
    seed_solution: Option<&Solution>,
    size: usize,
    rng: &mut R,
) -> Result<Vec<Solution>> {
    if let Some(seed) = seed_solution {
        return Ok(vec![seed.clone(); size]);
    }

    let first_echelon = first_echelon_routes(problem)?;
    let customers: Vec<usize> = problem
        .nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| n.is_customer())
        .map(|(i, _)| i)
        .collect();

    let mut population = Vec::with_capacity(size);
    for member in 0..size {
        let mut order = customers.clone();
        if member > 0 {
            order.shuffle(rng);
        }
        let solution = Solution::new(first_echelon.clone(), nearest_neighbor(problem, &order));
        debug!("initial solution {}: {}", member, solution);
        population.push(solution);
    }

    Ok(population)
}

/// Route every DC to its nearest satellite.
pub fn first_echelon_routes(problem: &Problem) -> Result<Vec<Route>> {
    let mut routes = Vec::new();
    for dc in problem.distribution_centers() {
        if let Some(satellite) = problem.nearest_satellite(&dc.id)? {
            routes.push(Route::from_ids(&[&dc.id, &satellite.id]));
        }
    }
    Ok(routes)
}

/// Greedy nearest-neighbor packing under vehicle capacity.
///
/// Each route opens with the first unvisited customer of `order` and is
/// extended with the closest unvisited customer that still fits. A customer
/// heavier than the capacity ends up alone on its route.
pub fn nearest_neighbor(problem: &Problem, order: &[usize]) -> Vec<Route> {
    let mut visited = vec![false; problem.nodes.len()];
    let mut routes = Vec::new();

    for &start in order {
        if visited[start] {
            continue;
        }

        visited[start] = true;
        let mut route = Route::new();
        route.nodes.push(problem.nodes[start].id.clone());
        let mut load = problem.nodes[start].demand() as f64;
        let mut current = start;

        loop {
            let next = order
                .iter()
                .copied()
                .filter(|&c| !visited[c])
                .filter(|&c| load + problem.nodes[c].demand() as f64 <= problem.vehicle_capacity)
                .min_by(|&a, &b| {
                    problem
                        .distance_by_index(current, a)
                        .total_cmp(&problem.distance_by_index(current, b))
                });

            let Some(next) = next else {
                break;
            };

            visited[next] = true;
            load += problem.nodes[next].demand() as f64;
            route.nodes.push(problem.nodes[next].id.clone());
            current = next;
        }

        routes.push(route);
    }

    routes
}
