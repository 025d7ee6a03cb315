//! The Recommender chains scoring terms and ranks the catalog.
//!
//! This module provides the main Recommender struct that sums the
//! configured terms per record and returns the catalog ordered best-first.

use catalog::{Accommodation, Catalog};
use rayon::prelude::*;
use tracing::debug;

use crate::prefs::PreferenceSet;
use crate::terms::{AmenityTerm, AreaTerm, BudgetTerm, ProximityTerm, RatingTerm, TripTypeTerm};
use crate::traits::ScoringTerm;
use crate::weights::ScoringWeights;

/// One term's contribution to a record's total score.
#[derive(Debug, Clone)]
pub struct TermScore {
    pub term: String,
    pub value: f64,
}

/// An accommodation record annotated with its total score and the
/// per-term breakdown. Produced per ranking pass and discarded after
/// rendering; never retained between passes.
#[derive(Debug, Clone)]
pub struct ScoredStay {
    pub stay: Accommodation,
    pub score: f64,
    pub breakdown: Vec<TermScore>,
}

/// Sums a stack of scoring terms and ranks the catalog.
///
/// ## Usage
/// ```ignore
/// let recommender = Recommender::with_weights(&ScoringWeights::classic());
/// let ranked = recommender.rank(&catalog, &prefs);
/// ```
///
/// Ranking is a pure, total function: it performs no I/O, never errors,
/// and returns a permutation of the catalog. Ties keep catalog order
/// (the final sort is stable), so with an empty preference set the
/// catalog's own order is a usable default ranking.
pub struct Recommender {
    terms: Vec<Box<dyn ScoringTerm>>,
}

impl Recommender {
    /// Create a new empty Recommender.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a term to the stack (builder pattern).
    pub fn add_term(mut self, term: impl ScoringTerm + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// The standard six-term stack, configured by a weight table. Terms a
    /// profile disables (empty proximity tiers, empty trip affinities)
    /// simply contribute zero.
    pub fn with_weights(weights: &ScoringWeights) -> Self {
        Self::new()
            .add_term(BudgetTerm::new(weights.budget.clone()))
            .add_term(AreaTerm::new(weights.area.clone()))
            .add_term(AmenityTerm::new(weights.amenity.clone()))
            .add_term(RatingTerm::new(weights.rating.clone()))
            .add_term(ProximityTerm::new(weights.proximity.clone()))
            .add_term(TripTypeTerm::new(weights.trip.clone()))
    }

    /// Score a single record: the sum of every term, with breakdown.
    fn score_stay(&self, stay: &Accommodation, prefs: &PreferenceSet) -> ScoredStay {
        let breakdown: Vec<TermScore> = self
            .terms
            .iter()
            .map(|term| TermScore {
                term: term.name().to_string(),
                value: term.score(stay, prefs),
            })
            .collect();
        let score = breakdown.iter().map(|t| t.value).sum();
        ScoredStay {
            stay: stay.clone(),
            score,
            breakdown,
        }
    }

    /// Rank the whole catalog under a preference snapshot, best first.
    ///
    /// ## Algorithm
    /// 1. Score every record independently (in parallel; the per-record
    ///    pass preserves catalog order).
    /// 2. Stable-sort descending by total score, so equal scores keep
    ///    their original catalog order.
    pub fn rank(&self, catalog: &Catalog, prefs: &PreferenceSet) -> Vec<ScoredStay> {
        let mut scored: Vec<ScoredStay> = catalog
            .stays()
            .par_iter()
            .map(|stay| self.score_stay(stay, prefs))
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            "Ranked {} records with {} terms",
            scored.len(),
            self.terms.len()
        );
        scored
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_weights(&ScoringWeights::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Coordinate, Price};

    fn stay(id: u32, area: &str, price: f64, rating: f64) -> Accommodation {
        Accommodation {
            id,
            name: format!("Stay {id}"),
            area: area.to_string(),
            price: Price::Amount(price),
            rating: Some(rating),
            location: Coordinate::new(18.2, 120.6),
            amenities: vec!["wifi".to_string()],
            description: None,
        }
    }

    fn catalog_of(stays: Vec<Accommodation>) -> Catalog {
        Catalog::from_records(stays).unwrap()
    }

    #[test]
    fn test_empty_recommender_scores_zero() {
        let catalog = catalog_of(vec![stay(1, "Laoag", 1000.0, 4.0)]);
        let ranked = Recommender::new().rank(&catalog, &PreferenceSet::new());
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 0.0);
        assert!(ranked[0].breakdown.is_empty());
    }

    #[test]
    fn test_rank_returns_a_permutation() {
        let catalog = catalog_of(vec![
            stay(1, "Laoag", 1800.0, 4.2),
            stay(2, "Paoay", 1500.0, 4.6),
            stay(3, "Pagudpud", 2500.0, 4.5),
        ]);
        let ranked = Recommender::default().rank(&catalog, &PreferenceSet::new());

        let mut ids: Vec<u32> = ranked.iter().map(|s| s.stay.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // Identical records (apart from id) score identically.
        let catalog = catalog_of(vec![
            stay(10, "Laoag", 1000.0, 4.0),
            stay(7, "Laoag", 1000.0, 4.0),
            stay(3, "Laoag", 1000.0, 4.0),
        ]);
        let ranked = Recommender::default().rank(&catalog, &PreferenceSet::new());
        let ids: Vec<u32> = ranked.iter().map(|s| s.stay.id).collect();
        assert_eq!(ids, vec![10, 7, 3]);
    }

    #[test]
    fn test_empty_catalog_ranks_to_empty() {
        let catalog = catalog_of(Vec::new());
        let ranked = Recommender::default().rank(&catalog, &PreferenceSet::new());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let catalog = catalog_of(vec![stay(1, "Paoay", 1500.0, 4.6)]);
        let prefs = PreferenceSet {
            area: Some("Paoay".to_string()),
            min_rating: Some(4.0),
            ..PreferenceSet::new()
        };
        let ranked = Recommender::default().rank(&catalog, &prefs);
        let sum: f64 = ranked[0].breakdown.iter().map(|t| t.value).sum();
        assert!((ranked[0].score - sum).abs() < 1e-9);
    }
}
