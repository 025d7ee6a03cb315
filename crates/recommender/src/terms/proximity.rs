//! Proximity term: distance from the reference coordinate, in tiers.

use catalog::Accommodation;

use crate::prefs::PreferenceSet;
use crate::traits::ScoringTerm;
use crate::weights::ProximityWeights;

/// Awards a tiered bonus that falls off with great-circle distance from
/// the preference's reference coordinate.
///
/// Tiers are checked in order and the first band covering the distance
/// wins; records beyond the last band are penalised. With no reference
/// coordinate, or an empty tier list (the term disabled by configuration),
/// every record is neutral.
pub struct ProximityTerm {
    weights: ProximityWeights,
}

impl ProximityTerm {
    pub fn new(weights: ProximityWeights) -> Self {
        Self { weights }
    }
}

impl ScoringTerm for ProximityTerm {
    fn name(&self) -> &str {
        "proximity"
    }

    fn score(&self, stay: &Accommodation, prefs: &PreferenceSet) -> f64 {
        let Some(center) = prefs.center else {
            return 0.0;
        };
        if self.weights.tiers.is_empty() {
            return 0.0;
        }
        let dist = stay.location.distance_km(center);
        for tier in &self.weights.tiers {
            if dist <= tier.max_km {
                return tier.bonus;
            }
        }
        -self.weights.far_penalty
    }
}
