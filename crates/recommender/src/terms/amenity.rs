//! Amenity term: desired amenities present on the record.

use catalog::Accommodation;

use crate::prefs::PreferenceSet;
use crate::traits::ScoringTerm;
use crate::weights::AmenityWeights;

/// Awards a fixed bonus per desired amenity the record carries
/// (set intersection size times the per-match weight).
pub struct AmenityTerm {
    weights: AmenityWeights,
}

impl AmenityTerm {
    pub fn new(weights: AmenityWeights) -> Self {
        Self { weights }
    }
}

impl ScoringTerm for AmenityTerm {
    fn name(&self) -> &str {
        "amenity"
    }

    fn score(&self, stay: &Accommodation, prefs: &PreferenceSet) -> f64 {
        let matches = prefs
            .amenities
            .iter()
            .filter(|tag| stay.has_amenity(tag))
            .count();
        matches as f64 * self.weights.per_match
    }
}
