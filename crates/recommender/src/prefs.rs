//! User preference snapshots.
//!
//! A [`PreferenceSet`] captures the user's filter criteria at the moment a
//! recommendation is requested. It is rebuilt by the caller whenever an input
//! changes and is never mutated by the ranking pass; every unset field means
//! "no opinion" and contributes a neutral score rather than a penalty.

use catalog::{Coordinate, PriceBand};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Budget preference, mirroring the two price representations in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Budget {
    /// Maximum nightly rate in pesos the user wants to pay.
    Ceiling(f64),
    /// Coarse band the user is shopping in.
    Band(PriceBand),
}

/// The kind of trip the user is planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Adventure,
    Culture,
    Surf,
    Relaxation,
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripType::Adventure => write!(f, "adventure"),
            TripType::Culture => write!(f, "culture"),
            TripType::Surf => write!(f, "surf"),
            TripType::Relaxation => write!(f, "relaxation"),
        }
    }
}

/// Error returned when a trip type string is not recognised.
#[derive(Error, Debug)]
#[error("Unknown trip type: {0} (expected adventure, culture, surf or relaxation)")]
pub struct ParseTripTypeError(String);

impl FromStr for TripType {
    type Err = ParseTripTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "adventure" => Ok(TripType::Adventure),
            "culture" => Ok(TripType::Culture),
            "surf" => Ok(TripType::Surf),
            "relaxation" => Ok(TripType::Relaxation),
            _ => Err(ParseTripTypeError(s.to_string())),
        }
    }
}

/// Snapshot of the user's current filter/ranking criteria.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceSet {
    /// Budget ceiling or band. `None` skips the budget term.
    pub budget: Option<Budget>,
    /// Desired municipality, matched case-insensitively. `None` means "any".
    pub area: Option<String>,
    /// Desired amenity tags (unordered, may be empty).
    pub amenities: Vec<String>,
    /// Minimum acceptable guest rating.
    pub min_rating: Option<f64>,
    /// Kind of trip being planned.
    pub trip_type: Option<TripType>,
    /// Reference coordinate for proximity scoring (map center or the
    /// user's own position).
    pub center: Option<Coordinate>,
}

impl PreferenceSet {
    /// An empty snapshot: every field at its "no opinion" default.
    pub fn new() -> Self {
        Self::default()
    }
}
