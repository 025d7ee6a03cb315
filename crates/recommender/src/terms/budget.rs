//! Budget term: how well the nightly rate fits the user's budget.

use catalog::{Accommodation, Price};

use crate::prefs::{Budget, PreferenceSet};
use crate::traits::ScoringTerm;
use crate::weights::BudgetWeights;

/// Scores the record's price against the budget preference.
///
/// ## Algorithm
/// - Ceiling budget vs numeric price: at or under budget earns the base
///   bonus plus an extra point per `under_divisor` pesos under, capped;
///   over by no more than `stretch_margin` of the budget earns the flat
///   stretch bonus; further over is penalised.
/// - Band budget: flat bonus on an exact band match, amounts coerced to
///   bands through the configured thresholds. No partial credit.
/// - Ceiling budget vs banded price: no peso comparison is possible, so
///   the term stays neutral rather than guessing.
pub struct BudgetTerm {
    weights: BudgetWeights,
}

impl BudgetTerm {
    pub fn new(weights: BudgetWeights) -> Self {
        Self { weights }
    }
}

impl ScoringTerm for BudgetTerm {
    fn name(&self) -> &str {
        "budget"
    }

    fn score(&self, stay: &Accommodation, prefs: &PreferenceSet) -> f64 {
        let w = &self.weights;
        match (&prefs.budget, &stay.price) {
            (None, _) => 0.0,
            (Some(Budget::Ceiling(budget)), Price::Amount(price)) => {
                let diff = price - budget;
                if diff <= 0.0 {
                    w.within_base + (-diff / w.under_divisor).min(w.under_bonus_cap)
                } else if diff <= budget * w.stretch_margin {
                    w.stretch_bonus
                } else {
                    -w.over_penalty
                }
            }
            (Some(Budget::Ceiling(_)), Price::Band(_)) => 0.0,
            (Some(Budget::Band(want)), price) => {
                if price.band(w.band_low_max, w.band_mid_max) == *want {
                    w.band_match_bonus
                } else {
                    0.0
                }
            }
        }
    }
}
