//! Nearest-neighbor route construction.
//!
//! Greedy constructive heuristic: starting from a chosen stop, repeatedly
//! visit the closest not-yet-visited stop. Produces a reasonable seed
//! order in O(n²) for the local-search and annealing stages to improve.
//!
//! # Reference
//!
//! Rosenkrantz, Stearns & Lewis (1977), "An analysis of several heuristics
//! for the traveling salesman problem".

use crate::geo::haversine_km;
use crate::route::{Route, Stop};

/// Builds a visiting order covering every input stop exactly once.
///
/// Starts at `start_index` (defaulted to 0 when out of range) and greedily
/// appends the nearest unvisited stop. Distance ties are broken by input
/// order: the first stop encountered during the scan wins, which keeps the
/// construction deterministic. Inputs of 0 or 1 stops are returned
/// unchanged.
pub fn nearest_neighbor(stops: &[Stop], start_index: usize) -> Route {
    if stops.len() <= 1 {
        return stops.to_vec();
    }

    let start = if start_index < stops.len() {
        start_index
    } else {
        0
    };

    let mut visited = vec![false; stops.len()];
    let mut route = Vec::with_capacity(stops.len());
    let mut current = start;

    visited[current] = true;
    route.push(stops[current].clone());

    for _ in 1..stops.len() {
        let mut nearest = None;
        let mut min_distance = f64::INFINITY;

        for (i, stop) in stops.iter().enumerate() {
            if visited[i] {
                continue;
            }
            // Strict < keeps the first-encountered stop on ties.
            let d = haversine_km(stops[current].position, stop.position);
            if d < min_distance {
                min_distance = d;
                nearest = Some(i);
            }
        }

        if let Some(next) = nearest {
            visited[next] = true;
            route.push(stops[next].clone());
            current = next;
        }
    }

    route
}
