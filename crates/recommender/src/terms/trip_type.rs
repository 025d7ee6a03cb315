//! Trip-type term: municipality associated with the planned kind of trip.

use catalog::Accommodation;

use crate::prefs::PreferenceSet;
use crate::traits::ScoringTerm;
use crate::weights::TripTypeWeights;

/// Awards a flat bonus when the record sits in the municipality the weight
/// table associates with the desired trip type (surf trips with Burgos,
/// heritage trips with Paoay, and so on).
///
/// The associations are data in the weight table, not logic; with no trip
/// type selected or no association configured the term is neutral.
pub struct TripTypeTerm {
    weights: TripTypeWeights,
}

impl TripTypeTerm {
    pub fn new(weights: TripTypeWeights) -> Self {
        Self { weights }
    }
}

impl ScoringTerm for TripTypeTerm {
    fn name(&self) -> &str {
        "trip_type"
    }

    fn score(&self, stay: &Accommodation, prefs: &PreferenceSet) -> f64 {
        let Some(trip) = prefs.trip_type else {
            return 0.0;
        };
        match self.weights.affinities.get(&trip) {
            Some(area) if stay.in_area(area) => self.weights.match_bonus,
            _ => 0.0,
        }
    }
}
