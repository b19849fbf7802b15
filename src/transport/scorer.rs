//! Weighted ranking of transport candidates.

use super::types::{TransportLeg, TransportMode};

/// Caller priorities for the three scoring dimensions.
///
/// Weights are multiplicative and non-negative; they need not sum to 1.
/// The default weighs duration, cost, and carbon equally.
///
/// # Examples
///
/// ```
/// use itinera::transport::RankWeights;
///
/// let eco = RankWeights::default().with_carbon(3.0);
/// assert!(eco.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankWeights {
    /// Weight on travel time.
    pub time: f64,
    /// Weight on monetary cost.
    pub cost: f64,
    /// Weight on CO2 emissions.
    pub carbon: f64,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            time: 1.0,
            cost: 1.0,
            carbon: 1.0,
        }
    }
}

impl RankWeights {
    /// Sets the time weight.
    pub fn with_time(mut self, w: f64) -> Self {
        self.time = w;
        self
    }

    /// Sets the cost weight.
    pub fn with_cost(mut self, w: f64) -> Self {
        self.cost = w;
        self
    }

    /// Sets the carbon weight.
    pub fn with_carbon(mut self, w: f64) -> Self {
        self.carbon = w;
        self
    }

    /// Validates that all weights are finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        for (name, w) in [
            ("time", self.time),
            ("cost", self.cost),
            ("carbon", self.carbon),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(format!("{name} weight must be non-negative, got {w}"));
            }
        }
        Ok(())
    }
}

/// A candidate leg with its normalized and composite scores attached.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedLeg {
    /// The scored candidate.
    pub leg: TransportLeg,
    /// Duration score in [0, 1]; the fastest candidate scores 1.
    pub time_score: f64,
    /// Cost score in [0, 1]; the cheapest candidate scores 1.
    pub cost_score: f64,
    /// Carbon score in [0, 1]; the cleanest candidate scores 1.
    pub carbon_score: f64,
    /// Weighted sum of the three scores.
    pub total_score: f64,
}

/// Ranks candidate legs for one origin-destination pair.
///
/// Each dimension is normalized against the spread of the candidate set:
/// `1 - (value - min) / max`, so the best candidate in a dimension scores
/// exactly 1 and a sole candidate scores 1 everywhere. When the max is 0
/// (all candidates free, instant, or clean) every candidate scores 1 in
/// that dimension. The per-dimension shift is constant across candidates,
/// so the resulting order is identical to plain `1 - value / max`
/// normalization.
///
/// Candidates are returned sorted descending by the weighted composite;
/// the sort is stable, so ties keep input order. An empty candidate set
/// yields an empty ranking. A mode the directions provider could not
/// serve is simply not among the candidates — its absence never fails
/// the ranking.
pub fn rank(legs: &[TransportLeg], weights: &RankWeights) -> Vec<RankedLeg> {
    weights.validate().expect("invalid RankWeights");

    let durations = Spread::over(legs.iter().map(|l| l.duration_secs));
    let costs = Spread::over(legs.iter().map(|l| l.cost_usd));
    let emissions = Spread::over(legs.iter().map(|l| l.co2_kg));

    let mut ranked: Vec<RankedLeg> = legs
        .iter()
        .map(|leg| {
            let time_score = durations.score(leg.duration_secs);
            let cost_score = costs.score(leg.cost_usd);
            let carbon_score = emissions.score(leg.co2_kg);
            let total_score = time_score * weights.time
                + cost_score * weights.cost
                + carbon_score * weights.carbon;
            RankedLeg {
                leg: leg.clone(),
                time_score,
                cost_score,
                carbon_score,
                total_score,
            }
        })
        .collect();

    // Stable sort: equal composites keep input order.
    ranked.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// Default mode for a leg of the given length, when full scoring data is
/// unavailable: under 1 km walk, under 5 km cycle, under 20 km take
/// transit, otherwise drive.
pub fn recommend(distance_km: f64) -> TransportMode {
    if distance_km < 1.0 {
        TransportMode::Walking
    } else if distance_km < 5.0 {
        TransportMode::Bicycling
    } else if distance_km < 20.0 {
        TransportMode::Transit
    } else {
        TransportMode::Driving
    }
}

/// Observed range of one scoring dimension over the candidate set.
struct Spread {
    min: f64,
    max: f64,
}

impl Spread {
    fn over(values: impl Iterator<Item = f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = 0.0f64;
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        Self { min, max }
    }

    /// `1 - (value - min) / max`, defined as 1 when the max is 0.
    fn score(&self, value: f64) -> f64 {
        if self.max > 0.0 {
            1.0 - (value - self.min) / self.max
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::types::CarbonRating;

    fn leg(mode: TransportMode, duration: f64, cost: f64, co2: f64) -> TransportLeg {
        TransportLeg {
            mode,
            duration_secs: duration,
            distance_m: 0.0,
            cost_usd: cost,
            co2_kg: co2,
            rating: CarbonRating::from_co2_kg(co2),
        }
    }

    #[test]
    fn test_empty_candidate_set_is_empty_ranking() {
        assert!(rank(&[], &RankWeights::default()).is_empty());
    }

    #[test]
    fn test_single_candidate_scores_all_ones() {
        let legs = vec![leg(TransportMode::Driving, 600.0, 3.0, 0.5)];
        let ranked = rank(&legs, &RankWeights::default());
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].time_score, 1.0);
        assert_eq!(ranked[0].cost_score, 1.0);
        assert_eq!(ranked[0].carbon_score, 1.0);
        assert_eq!(ranked[0].total_score, 3.0);
    }

    #[test]
    fn test_driving_vs_walking_scenario() {
        let driving = leg(TransportMode::Driving, 600.0, 3.0, 0.5);
        let walking = leg(TransportMode::Walking, 1800.0, 0.0, 0.0);
        let ranked = rank(&[driving, walking], &RankWeights::default());

        let walk = ranked
            .iter()
            .find(|r| r.leg.mode == TransportMode::Walking)
            .unwrap();
        let drive = ranked
            .iter()
            .find(|r| r.leg.mode == TransportMode::Driving)
            .unwrap();

        // Best-in-dimension scores exactly 1.
        assert_eq!(drive.time_score, 1.0);
        assert_eq!(walk.cost_score, 1.0);
        assert_eq!(walk.carbon_score, 1.0);

        // Losing-dimension scores follow 1 - (value - min) / max.
        assert!((walk.time_score - (1.0 - 1200.0 / 1800.0)).abs() < 1e-12);
        assert_eq!(drive.cost_score, 0.0);
        assert_eq!(drive.carbon_score, 0.0);

        // Composites: walking 1/3 + 1 + 1 = 7/3, driving 1 + 0 + 0 = 1.
        assert!((walk.total_score - 7.0 / 3.0).abs() < 1e-12);
        assert!((drive.total_score - 1.0).abs() < 1e-12);
        assert_eq!(ranked[0].leg.mode, TransportMode::Walking);
    }

    #[test]
    fn test_all_free_dimension_scores_one_for_everyone() {
        let a = leg(TransportMode::Walking, 900.0, 0.0, 0.0);
        let b = leg(TransportMode::Bicycling, 400.0, 0.0, 0.0);
        let ranked = rank(&[a, b], &RankWeights::default());
        for r in &ranked {
            assert_eq!(r.cost_score, 1.0);
            assert_eq!(r.carbon_score, 1.0);
        }
        assert_eq!(ranked[0].leg.mode, TransportMode::Bicycling);
    }

    #[test]
    fn test_weights_change_the_winner() {
        let driving = leg(TransportMode::Driving, 600.0, 3.0, 0.5);
        let walking = leg(TransportMode::Walking, 1800.0, 0.0, 0.0);

        // Caring only about time puts driving first.
        let time_only = RankWeights::default().with_cost(0.0).with_carbon(0.0);
        let ranked = rank(&[driving, walking], &time_only);
        assert_eq!(ranked[0].leg.mode, TransportMode::Driving);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let a = leg(TransportMode::Walking, 600.0, 0.0, 0.0);
        let b = leg(TransportMode::Bicycling, 600.0, 0.0, 0.0);
        let ranked = rank(&[a, b], &RankWeights::default());
        assert_eq!(ranked[0].leg.mode, TransportMode::Walking);
        assert_eq!(ranked[1].leg.mode, TransportMode::Bicycling);
    }

    #[test]
    fn test_negative_weight_rejected() {
        assert!(RankWeights::default().with_cost(-1.0).validate().is_err());
    }

    #[test]
    fn test_recommend_distance_bands() {
        assert_eq!(recommend(0.5), TransportMode::Walking);
        assert_eq!(recommend(1.0), TransportMode::Bicycling);
        assert_eq!(recommend(4.9), TransportMode::Bicycling);
        assert_eq!(recommend(5.0), TransportMode::Transit);
        assert_eq!(recommend(19.9), TransportMode::Transit);
        assert_eq!(recommend(20.0), TransportMode::Driving);
    }
}
