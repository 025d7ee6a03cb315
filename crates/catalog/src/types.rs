//! Core domain types for the accommodation catalog.
//!
//! This module defines the fundamental data structures used throughout the
//! system: the accommodation record itself, its price representation (the
//! dataset exists in a per-night-amount flavour and a coarse-band flavour,
//! both accepted here), and the in-memory catalog with its lookup indices.

use crate::error::{CatalogError, Result};
use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for an accommodation record within a catalog.
pub type StayId = u32;

// =============================================================================
// Price
// =============================================================================

/// Coarse price band used by the categorical catalog flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    Low,
    Mid,
    High,
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceBand::Low => write!(f, "low"),
            PriceBand::Mid => write!(f, "mid"),
            PriceBand::High => write!(f, "high"),
        }
    }
}

impl FromStr for PriceBand {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(PriceBand::Low),
            "mid" => Ok(PriceBand::Mid),
            "high" => Ok(PriceBand::High),
            _ => Err(CatalogError::InvalidValue {
                field: "price band".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Nightly price of a record.
///
/// The two catalog flavours store price differently: a numeric amount in
/// pesos, or a coarse band. The untagged serde representation accepts both
/// (`1800` or `"mid"`) so one loader covers both datasets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// Nightly rate in Philippine pesos.
    Amount(f64),
    /// Coarse category from the banded dataset flavour.
    Band(PriceBand),
}

impl Price {
    /// Numeric amount if this price carries one.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Amount(a) => Some(*a),
            Price::Band(_) => None,
        }
    }

    /// Band of this price, coercing amounts through the given thresholds
    /// (inclusive upper bounds for low and mid).
    pub fn band(&self, low_max: f64, mid_max: f64) -> PriceBand {
        match self {
            Price::Band(b) => *b,
            Price::Amount(a) if *a <= low_max => PriceBand::Low,
            Price::Amount(a) if *a <= mid_max => PriceBand::Mid,
            Price::Amount(_) => PriceBand::High,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(a) => write!(f, "₱{a:.0}"),
            Price::Band(b) => write!(f, "{b}"),
        }
    }
}

// =============================================================================
// Accommodation
// =============================================================================

/// One accommodation record: a hotel, inn, lodge or guesthouse.
///
/// Records are read-only once loaded; the catalog is immutable for the
/// lifetime of the process. Amenity tags are normalised to lowercase by the
/// loader so matching is a plain set intersection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: StayId,
    pub name: String,
    /// Municipality the record sits in, matched case-insensitively.
    pub area: String,
    pub price: Price,
    /// Average guest rating on a 1.0–5.0 scale, when known.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(flatten)]
    pub location: Coordinate,
    /// Unordered amenity tags ("wifi", "parking", ...). May be empty.
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, rename = "desc")]
    pub description: Option<String>,
}

impl Accommodation {
    /// Whether this record sits in the given municipality (case-insensitive).
    pub fn in_area(&self, area: &str) -> bool {
        self.area.eq_ignore_ascii_case(area)
    }

    /// Whether this record carries the given amenity tag.
    pub fn has_amenity(&self, tag: &str) -> bool {
        self.amenities.iter().any(|a| a.eq_ignore_ascii_case(tag))
    }
}

// =============================================================================
// Catalog - The Core In-Memory Dataset
// =============================================================================

/// The full, immutable set of accommodation records.
///
/// Keeps the records in their original file order (ranking relies on that
/// order for tie-breaking) plus an id index for O(1) lookups.
#[derive(Debug, Default)]
pub struct Catalog {
    stays: Vec<Accommodation>,
    by_id: HashMap<StayId, usize>,
}

impl Catalog {
    /// Build a catalog from parsed records, validating the invariants the
    /// rest of the system relies on: unique ids and in-range coordinates.
    pub fn from_records(stays: Vec<Accommodation>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(stays.len());
        for (idx, stay) in stays.iter().enumerate() {
            if by_id.insert(stay.id, idx).is_some() {
                return Err(CatalogError::DuplicateId { id: stay.id });
            }
            if !stay.location.is_valid() {
                return Err(CatalogError::InvalidCoordinate {
                    id: stay.id,
                    lat: stay.location.lat,
                    lng: stay.location.lng,
                });
            }
        }
        Ok(Self { stays, by_id })
    }

    /// All records, in catalog order.
    pub fn stays(&self) -> &[Accommodation] {
        &self.stays
    }

    /// Get a record by id.
    pub fn get(&self, id: StayId) -> Option<&Accommodation> {
        self.by_id.get(&id).map(|&idx| &self.stays[idx])
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.stays.len()
    }

    /// Whether the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.stays.is_empty()
    }

    /// Distinct municipality names, sorted.
    pub fn areas(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.stays.iter().map(|s| s.area.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// Distinct amenity tags across the catalog, sorted.
    pub fn amenities(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .stays
            .iter()
            .flat_map(|s| s.amenities.iter().map(String::as_str))
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// The `n` records closest to `center` by great-circle distance,
    /// nearest first.
    pub fn nearest(&self, center: Coordinate, n: usize) -> Vec<&Accommodation> {
        let mut with_dist: Vec<(&Accommodation, f64)> = self
            .stays
            .iter()
            .map(|s| (s, s.location.distance_km(center)))
            .collect();
        with_dist.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        with_dist.into_iter().take(n).map(|(s, _)| s).collect()
    }
}
