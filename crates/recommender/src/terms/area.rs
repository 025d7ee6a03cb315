//! Area term: does the record sit in the desired municipality?

use catalog::Accommodation;

use crate::prefs::PreferenceSet;
use crate::traits::ScoringTerm;
use crate::weights::AreaWeights;

/// Scores the record's municipality against the desired area.
///
/// A match earns the dominant flat bonus. With no area preference every
/// record gets the small neutral baseline instead, so an unfiltered pass
/// is not penalised relative to a filtered one.
pub struct AreaTerm {
    weights: AreaWeights,
}

impl AreaTerm {
    pub fn new(weights: AreaWeights) -> Self {
        Self { weights }
    }
}

impl ScoringTerm for AreaTerm {
    fn name(&self) -> &str {
        "area"
    }

    fn score(&self, stay: &Accommodation, prefs: &PreferenceSet) -> f64 {
        match &prefs.area {
            Some(area) if stay.in_area(area) => self.weights.match_bonus,
            Some(_) => 0.0,
            None => self.weights.neutral_bonus,
        }
    }
}
