//! Proximity clustering of stops.
//!
//! Greedy single-pass grouping used by the application layer to organize
//! a day's stops into walkable neighborhoods before optimizing each
//! group. Not a general clustering algorithm: the first unvisited stop
//! seeds each cluster, so the result depends on input order, which is the
//! behavior planners expect when stops arrive in the order they were
//! added.

use crate::geo::{haversine_km, GeoPoint};
use crate::route::Stop;

/// A group of mutually nearby stops and its coordinate centroid.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cluster {
    /// Member stops, seed first, in input order.
    pub stops: Vec<Stop>,
    /// Arithmetic mean of the member coordinates.
    pub center: GeoPoint,
}

/// Groups stops so that every member lies within `max_distance_km` of its
/// cluster's seed stop.
///
/// Scans stops in input order; each not-yet-grouped stop seeds a new
/// cluster and absorbs every later ungrouped stop within range of the
/// seed. Every input stop lands in exactly one cluster. An empty input
/// yields no clusters.
pub fn cluster_nearby(stops: &[Stop], max_distance_km: f64) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    let mut grouped = vec![false; stops.len()];

    for (i, seed) in stops.iter().enumerate() {
        if grouped[i] {
            continue;
        }
        grouped[i] = true;
        let mut members = vec![seed.clone()];

        for (j, other) in stops.iter().enumerate().skip(i + 1) {
            if grouped[j] {
                continue;
            }
            if haversine_km(seed.position, other.position) <= max_distance_km {
                grouped[j] = true;
                members.push(other.clone());
            }
        }

        let center = centroid(&members);
        clusters.push(Cluster {
            stops: members,
            center,
        });
    }

    clusters
}

/// Mean position of a non-empty stop list.
///
/// Means of valid coordinates stay in range, so reconstruction cannot
/// fail.
fn centroid(stops: &[Stop]) -> GeoPoint {
    let n = stops.len() as f64;
    let lat = stops.iter().map(|s| s.position.lat()).sum::<f64>() / n;
    let lng = stops.iter().map(|s| s.position.lng()).sum::<f64>() / n;
    GeoPoint::new(lat, lng).unwrap_or_else(|_| stops[0].position)
}
