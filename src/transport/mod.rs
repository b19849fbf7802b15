//! Multi-modal transport scoring.
//!
//! Ranks candidate travel modes for a single origin-destination leg by a
//! weighted combination of duration, monetary cost, and carbon footprint.
//! Leg measurements (duration, distance) come from an external directions
//! provider; a mode the provider cannot serve is simply absent from the
//! candidate set, never an error. Cost and CO2 estimates are derived here
//! from per-mode rate tables.

mod scorer;
mod types;

pub use scorer::{rank, recommend, RankWeights, RankedLeg};
pub use types::{
    format_duration, summarize, CarbonRating, JourneySummary, TransportLeg, TransportMode,
};
