//! # Recommender Crate
//!
//! The pure ranking core: rule-based additive scoring of accommodation
//! records under a user preference snapshot.
//!
//! ## Components
//!
//! - **prefs**: the `PreferenceSet` snapshot and its value types
//! - **weights**: the configurable `ScoringWeights` table with the two
//!   built-in profiles (`classic`, `trip_planner`)
//! - **traits**: the `ScoringTerm` trait
//! - **terms**: one implementation per additive term (budget, area,
//!   amenity, rating, proximity, trip type)
//! - **ranker**: the `Recommender` that sums terms and stable-sorts
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommender::{PreferenceSet, Recommender, ScoringWeights};
//!
//! let recommender = Recommender::with_weights(&ScoringWeights::classic());
//! let prefs = PreferenceSet {
//!     budget: Some(recommender::Budget::Ceiling(1500.0)),
//!     area: Some("Paoay".to_string()),
//!     ..PreferenceSet::new()
//! };
//! let ranked = recommender.rank(&catalog, &prefs);
//! for scored in ranked.iter().take(5) {
//!     println!("{:>6.1}  {}", scored.score, scored.stay.name);
//! }
//! ```
//!
//! Ranking is synchronous, idempotent and total: the same catalog and
//! snapshot always produce the same ordering, and no shared state is
//! written. Input validation is the caller's job; unset preference fields
//! are "no opinion", never an error.

// Public modules
pub mod prefs;
pub mod ranker;
pub mod terms;
pub mod traits;
pub mod weights;

// Re-export commonly used types
pub use prefs::{Budget, ParseTripTypeError, PreferenceSet, TripType};
pub use ranker::{Recommender, ScoredStay, TermScore};
pub use traits::ScoringTerm;
pub use weights::ScoringWeights;
