//! Core trait for the scoring pipeline.
//!
//! Each additive component of the total score (budget, area, amenity,
//! rating, proximity, trip type) implements [`ScoringTerm`] so the rule set
//! is composable and each term can be tested in isolation.

use catalog::Accommodation;

use crate::prefs::PreferenceSet;

/// One additive component of a record's total score.
///
/// Terms are pure: evaluated independently per record, no cross-record
/// interaction, no I/O, no errors. A term that does not apply — the
/// preference field it reads is unset, or the record lacks the data —
/// returns a neutral value (usually 0.0), never a panic.
///
/// `Send + Sync` allows terms to be evaluated from the parallel scoring
/// pass without cloning.
pub trait ScoringTerm: Send + Sync {
    /// Returns the name of this term (for breakdowns and logging).
    fn name(&self) -> &str;

    /// Score contribution of this term for one record under the given
    /// preference snapshot. Positive, negative or zero.
    fn score(&self, stay: &Accommodation, prefs: &PreferenceSet) -> f64;
}
