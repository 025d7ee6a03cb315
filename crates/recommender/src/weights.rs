//! The configurable scoring-weight table.
//!
//! The two historical implementations of this recommender disagreed on
//! weights and even on which terms existed (numeric-budget scoring with
//! proximity tiers versus band matching with trip-type bonuses). Rather than
//! duplicating the rule set, every constant lives in this one serde-friendly
//! table; the two schemes survive as the [`ScoringWeights::classic`] and
//! [`ScoringWeights::trip_planner`] profiles, and a custom table can be
//! loaded from JSON.

use crate::prefs::TripType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weights for the budget term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetWeights {
    /// Base bonus when the nightly rate is at or under the budget ceiling.
    pub within_base: f64,
    /// Cap on the extra bonus for being under budget.
    pub under_bonus_cap: f64,
    /// Pesos under budget per extra bonus point.
    pub under_divisor: f64,
    /// Fraction of the budget a record may exceed it by and still earn
    /// the stretch bonus (0.25 = up to 25% over).
    pub stretch_margin: f64,
    /// Flat bonus for records within the stretch margin.
    pub stretch_bonus: f64,
    /// Penalty for records beyond the stretch margin.
    pub over_penalty: f64,
    /// Flat bonus on an exact price-band match (banded budgets only).
    pub band_match_bonus: f64,
    /// Inclusive upper bound of the "low" band when coercing amounts.
    pub band_low_max: f64,
    /// Inclusive upper bound of the "mid" band when coercing amounts.
    pub band_mid_max: f64,
}

/// Weights for the area term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaWeights {
    /// Bonus when the record sits in the desired municipality. The
    /// dominant term: an area match should outweigh most other factors.
    pub match_bonus: f64,
    /// Baseline awarded to every record when no area is desired, so an
    /// unfiltered pass is not penalised relative to a filtered one.
    pub neutral_bonus: f64,
}

/// Weights for the amenity term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenityWeights {
    /// Bonus per desired amenity present on the record.
    pub per_match: f64,
}

/// Weights for the rating term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingWeights {
    /// Bonus per star above the requested minimum.
    pub exceed_per_star: f64,
    /// Flat bonus for meeting the minimum at all.
    pub meets_bonus: f64,
    /// Penalty per star below the requested minimum.
    pub shortfall_per_star: f64,
    /// Bonus per raw star when no minimum is requested.
    pub baseline_per_star: f64,
}

/// One distance band of the proximity term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProximityTier {
    /// Inclusive upper bound of this band in kilometres.
    pub max_km: f64,
    pub bonus: f64,
}

/// Weights for the proximity term.
///
/// Tiers are checked in order; the first band whose `max_km` covers the
/// great-circle distance wins. An empty tier list disables the term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProximityWeights {
    pub tiers: Vec<ProximityTier>,
    /// Penalty for records beyond the last band.
    pub far_penalty: f64,
}

/// Weights for the trip-type term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripTypeWeights {
    /// Bonus when the record's area is associated with the desired trip type.
    pub match_bonus: f64,
    /// Trip type to municipality associations. Empty disables the term.
    #[serde(default)]
    pub affinities: HashMap<TripType, String>,
}

/// The full scoring-weight table: one sub-table per additive term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub budget: BudgetWeights,
    pub area: AreaWeights,
    pub amenity: AmenityWeights,
    pub rating: RatingWeights,
    pub proximity: ProximityWeights,
    pub trip: TripTypeWeights,
}

impl ScoringWeights {
    /// The numeric-budget scheme: graded budget scoring and tiered
    /// proximity bonuses, no trip-type associations.
    pub fn classic() -> Self {
        Self {
            budget: BudgetWeights {
                within_base: 30.0,
                under_bonus_cap: 10.0,
                under_divisor: 50.0,
                stretch_margin: 0.25,
                stretch_bonus: 10.0,
                over_penalty: 10.0,
                band_match_bonus: 30.0,
                band_low_max: 1000.0,
                band_mid_max: 2000.0,
            },
            area: AreaWeights {
                match_bonus: 40.0,
                neutral_bonus: 5.0,
            },
            amenity: AmenityWeights { per_match: 12.0 },
            rating: RatingWeights {
                exceed_per_star: 15.0,
                meets_bonus: 10.0,
                shortfall_per_star: 10.0,
                baseline_per_star: 5.0,
            },
            proximity: ProximityWeights {
                tiers: vec![
                    ProximityTier { max_km: 5.0, bonus: 20.0 },
                    ProximityTier { max_km: 15.0, bonus: 10.0 },
                    ProximityTier { max_km: 30.0, bonus: 5.0 },
                ],
                far_penalty: 5.0,
            },
            trip: TripTypeWeights {
                match_bonus: 0.0,
                affinities: HashMap::new(),
            },
        }
    }

    /// The band-matching scheme: flat budget bonus on band match, trip-type
    /// to municipality associations, proximity disabled.
    pub fn trip_planner() -> Self {
        let mut affinities = HashMap::new();
        affinities.insert(TripType::Adventure, "Pagudpud".to_string());
        affinities.insert(TripType::Culture, "Paoay".to_string());
        affinities.insert(TripType::Surf, "Burgos".to_string());
        affinities.insert(TripType::Relaxation, "Currimao".to_string());

        Self {
            proximity: ProximityWeights {
                tiers: Vec::new(),
                far_penalty: 0.0,
            },
            trip: TripTypeWeights {
                match_bonus: 15.0,
                affinities,
            },
            ..Self::classic()
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_differ_where_expected() {
        let classic = ScoringWeights::classic();
        let trip = ScoringWeights::trip_planner();

        assert!(!classic.proximity.tiers.is_empty());
        assert!(trip.proximity.tiers.is_empty());
        assert!(classic.trip.affinities.is_empty());
        assert_eq!(trip.trip.affinities[&TripType::Adventure], "Pagudpud");
        // Shared terms stay aligned between the profiles.
        assert_eq!(classic.area.match_bonus, trip.area.match_bonus);
    }

    #[test]
    fn test_weights_round_trip_through_json() {
        let json = serde_json::to_string(&ScoringWeights::trip_planner()).unwrap();
        let back: ScoringWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(back.area.neutral_bonus, 5.0);
        assert_eq!(back.trip.affinities[&TripType::Surf], "Burgos");
    }

    #[test]
    fn test_custom_table_from_json() {
        let json = r#"{
            "budget": { "within_base": 20, "under_bonus_cap": 5, "under_divisor": 100,
                        "stretch_margin": 0.1, "stretch_bonus": 5, "over_penalty": 20,
                        "band_match_bonus": 25, "band_low_max": 800, "band_mid_max": 1800 },
            "area": { "match_bonus": 50, "neutral_bonus": 0 },
            "amenity": { "per_match": 8 },
            "rating": { "exceed_per_star": 10, "meets_bonus": 5,
                        "shortfall_per_star": 5, "baseline_per_star": 2 },
            "proximity": { "tiers": [ { "max_km": 10, "bonus": 15 } ], "far_penalty": 3 },
            "trip": { "match_bonus": 10, "affinities": { "surf": "Burgos" } }
        }"#;
        let weights: ScoringWeights = serde_json::from_str(json).unwrap();
        assert_eq!(weights.area.match_bonus, 50.0);
        assert_eq!(weights.proximity.tiers.len(), 1);
        assert_eq!(weights.trip.affinities[&TripType::Surf], "Burgos");
    }
}
