//! Rating term: guest rating against the requested minimum.

use catalog::Accommodation;

use crate::prefs::PreferenceSet;
use crate::traits::ScoringTerm;
use crate::weights::RatingWeights;

/// Scores the record's guest rating.
///
/// ## Algorithm
/// - With a minimum: meeting it earns the flat meets bonus plus a bonus per
///   star above; missing it costs a penalty per star short.
/// - Without a minimum: a small bonus proportional to the raw rating, so
///   better-reviewed records still float up.
/// - A record with no rating is neutral either way.
pub struct RatingTerm {
    weights: RatingWeights,
}

impl RatingTerm {
    pub fn new(weights: RatingWeights) -> Self {
        Self { weights }
    }
}

impl ScoringTerm for RatingTerm {
    fn name(&self) -> &str {
        "rating"
    }

    fn score(&self, stay: &Accommodation, prefs: &PreferenceSet) -> f64 {
        let w = &self.weights;
        let Some(rating) = stay.rating else {
            return 0.0;
        };
        match prefs.min_rating {
            Some(min) if rating >= min => (rating - min) * w.exceed_per_star + w.meets_bonus,
            Some(min) => -(min - rating) * w.shortfall_per_star,
            None => rating * w.baseline_per_star,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Coordinate, Price};

    use crate::weights::ScoringWeights;

    fn stay_rated(rating: Option<f64>) -> Accommodation {
        Accommodation {
            id: 1,
            name: "Test Inn".to_string(),
            area: "Laoag".to_string(),
            price: Price::Amount(1000.0),
            rating,
            location: Coordinate::new(18.2, 120.6),
            amenities: vec![],
            description: None,
        }
    }

    fn term() -> RatingTerm {
        RatingTerm::new(ScoringWeights::classic().rating)
    }

    fn prefs_with_min(min: f64) -> PreferenceSet {
        PreferenceSet {
            min_rating: Some(min),
            ..PreferenceSet::new()
        }
    }

    #[test]
    fn test_exceeding_the_minimum_scales_with_margin() {
        // (4.6 - 4.0) * 15 + 10 = 19
        let score = term().score(&stay_rated(Some(4.6)), &prefs_with_min(4.0));
        assert!((score - 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_meeting_the_minimum_exactly_earns_the_flat_bonus() {
        let score = term().score(&stay_rated(Some(4.0)), &prefs_with_min(4.0));
        assert!((score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_the_minimum_is_penalised_by_shortfall() {
        // -(4.5 - 3.8) * 10 = -7
        let score = term().score(&stay_rated(Some(3.8)), &prefs_with_min(4.5));
        assert!((score + 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_minimum_rewards_raw_rating() {
        let score = term().score(&stay_rated(Some(4.2)), &PreferenceSet::new());
        assert!((score - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_unrated_record_is_neutral() {
        assert_eq!(term().score(&stay_rated(None), &prefs_with_min(4.0)), 0.0);
        assert_eq!(term().score(&stay_rated(None), &PreferenceSet::new()), 0.0);
    }
}
