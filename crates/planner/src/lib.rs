//! Presentation-side coordinator for the accommodation recommender.
//!
//! Owns the shared catalog, the configured recommender and the maps client,
//! and exposes the operations a front end would call.

pub mod orchestrator;

pub use orchestrator::{StayPlanner, StayRecommendation};
