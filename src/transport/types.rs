//! Transport modes, legs, and derived estimates.

use std::fmt;

/// A travel mode for one leg of a journey.
///
/// The rate tables below are exhaustive matches, so adding a mode is a
/// compile-time checklist rather than a runtime lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransportMode {
    /// Private car.
    Driving,
    /// On foot.
    Walking,
    /// Bicycle.
    Bicycling,
    /// Public transport.
    Transit,
}

impl TransportMode {
    /// Monetary rate as `(base_usd, usd_per_km)`.
    ///
    /// Driving approximates fuel cost; transit approximates a flat fare
    /// plus a distance component.
    pub fn cost_rate(self) -> (f64, f64) {
        match self {
            TransportMode::Driving => (0.0, 0.5),
            TransportMode::Walking => (0.0, 0.0),
            TransportMode::Bicycling => (0.0, 0.0),
            TransportMode::Transit => (2.5, 0.15),
        }
    }

    /// CO2 emissions in kg per km.
    pub fn emission_rate(self) -> f64 {
        match self {
            TransportMode::Driving => 0.192,
            TransportMode::Walking => 0.0,
            TransportMode::Bicycling => 0.0,
            TransportMode::Transit => 0.089,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransportMode::Driving => "driving",
            TransportMode::Walking => "walking",
            TransportMode::Bicycling => "bicycling",
            TransportMode::Transit => "transit",
        };
        f.write_str(label)
    }
}

/// Qualitative carbon footprint band for one leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarbonRating {
    /// Zero emissions.
    Excellent,
    /// Under 1 kg CO2.
    Good,
    /// Under 3 kg CO2.
    Moderate,
    /// 3 kg CO2 or more.
    High,
}

impl CarbonRating {
    /// Bands a CO2 mass in kilograms.
    pub fn from_co2_kg(co2_kg: f64) -> Self {
        if co2_kg == 0.0 {
            CarbonRating::Excellent
        } else if co2_kg < 1.0 {
            CarbonRating::Good
        } else if co2_kg < 3.0 {
            CarbonRating::Moderate
        } else {
            CarbonRating::High
        }
    }
}

/// One mode's measured and derived figures for a single leg.
///
/// Ephemeral, computed per query. [`TransportLeg::new`] derives cost, CO2,
/// and rating from the mode's rate tables; fields are public so callers
/// with better external estimates can supply their own.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransportLeg {
    /// Travel mode for this leg.
    pub mode: TransportMode,
    /// Measured travel time in seconds.
    pub duration_secs: f64,
    /// Measured travel distance in meters.
    pub distance_m: f64,
    /// Estimated monetary cost in USD.
    pub cost_usd: f64,
    /// Estimated CO2 emissions in kilograms.
    pub co2_kg: f64,
    /// Qualitative band for `co2_kg`.
    pub rating: CarbonRating,
}

impl TransportLeg {
    /// Builds a leg from provider measurements, deriving cost, CO2, and
    /// carbon rating from the mode's rate tables.
    pub fn new(mode: TransportMode, duration_secs: f64, distance_m: f64) -> Self {
        let distance_km = distance_m / 1000.0;
        let (base, per_km) = mode.cost_rate();
        let cost_usd = base + distance_km * per_km;
        let co2_kg = distance_km * mode.emission_rate();

        Self {
            mode,
            duration_secs,
            distance_m,
            cost_usd,
            co2_kg,
            rating: CarbonRating::from_co2_kg(co2_kg),
        }
    }
}

/// Totals over the chosen leg of each segment of a multi-stop journey.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JourneySummary {
    /// Total travel time in seconds.
    pub total_duration_secs: f64,
    /// Total distance in meters.
    pub total_distance_m: f64,
    /// Total estimated cost in USD.
    pub total_cost_usd: f64,
    /// Total estimated CO2 in kilograms.
    pub total_co2_kg: f64,
    /// Distinct modes used, in first-use order.
    pub modes: Vec<TransportMode>,
}

/// Sums the per-segment legs of a journey into one summary.
pub fn summarize(legs: &[TransportLeg]) -> JourneySummary {
    let mut modes = Vec::new();
    for leg in legs {
        if !modes.contains(&leg.mode) {
            modes.push(leg.mode);
        }
    }

    JourneySummary {
        total_duration_secs: legs.iter().map(|l| l.duration_secs).sum(),
        total_distance_m: legs.iter().map(|l| l.distance_m).sum(),
        total_cost_usd: legs.iter().map(|l| l.cost_usd).sum(),
        total_co2_kg: legs.iter().map(|l| l.co2_kg).sum(),
        modes,
    }
}

/// Formats a duration as `"2h 5m"` or `"45m"`.
pub fn format_duration(secs: f64) -> String {
    let total_minutes = (secs / 60.0).floor() as u64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
