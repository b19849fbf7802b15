//! Route optimization core for travel itineraries.
//!
//! Given a set of geolocated stops, computes a visiting order that
//! approximately minimizes total great-circle travel distance using a
//! layered pipeline of classical heuristics:
//!
//! - **Nearest Neighbor**: O(n²) greedy construction of an initial order.
//! - **2-opt**: local search that reverses sub-segments while doing so
//!   strictly reduces total distance.
//! - **Simulated Annealing (SA)**: stochastic global refinement that
//!   accepts worsening swaps with decreasing probability, tracking the
//!   best order seen.
//! - **Orchestrator**: chains the stages per a strategy configuration and
//!   reports before/after distance statistics.
//!
//! A companion [`transport`] module ranks candidate travel modes for a
//! single origin-destination leg by a weighted combination of duration,
//! monetary cost, and carbon footprint.
//!
//! # Scope
//!
//! This crate is a pure computation library: synchronous, single-threaded,
//! no I/O. Geocoding, turn-by-turn directions, and other network-facing
//! collaborators live in the consuming application; the optimizer accepts
//! already-resolved [`route::Stop`] and [`transport::TransportLeg`] data.
//! Distances are great-circle (haversine), a flat proxy for real travel
//! distance — road-network routing and exact TSP solving are non-goals.
//!
//! # Example
//!
//! ```
//! use itinera::geo::GeoPoint;
//! use itinera::optimizer::{Optimizer, OptimizerConfig, Strategy};
//! use itinera::route::Stop;
//!
//! let stops = vec![
//!     Stop::new("museum", GeoPoint::new(48.8606, 2.3376)?)?,
//!     Stop::new("tower", GeoPoint::new(48.8584, 2.2945)?)?,
//!     Stop::new("cathedral", GeoPoint::new(48.8530, 2.3499)?)?,
//!     Stop::new("basilica", GeoPoint::new(48.8867, 2.3431)?)?,
//! ];
//!
//! let config = OptimizerConfig::default().with_strategy(Strategy::two_opt());
//! let result = Optimizer::run(&stops, &config);
//! assert!(result.optimized_distance <= result.original_distance);
//! # Ok::<(), String>(())
//! ```

pub mod cluster;
pub mod geo;
pub mod nearest;
pub mod optimizer;
pub mod route;
pub mod sa;
pub mod transport;
pub mod two_opt;
