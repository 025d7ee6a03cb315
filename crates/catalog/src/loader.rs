//! Loader for accommodation catalog files.
//!
//! The catalog is a JSON array of records. Two dataset flavours exist in the
//! wild: one with numeric nightly rates and one with coarse price bands; the
//! untagged [`Price`](crate::types::Price) representation lets a single loader
//! accept both. A small default dataset for Ilocos Norte is embedded in the
//! binary so the tool works without any files on disk.

use crate::error::{CatalogError, Result};
use crate::types::{Accommodation, Catalog};
use std::fs;
use std::path::Path;
use tracing::info;

/// The embedded default dataset (Ilocos Norte accommodations).
const DEFAULT_DATASET: &str = include_str!("../data/accommodations.json");

/// Parse catalog JSON, normalise amenity tags and validate invariants.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let mut records: Vec<Accommodation> = serde_json::from_str(json)?;

    // Amenity tags are matched as a set intersection downstream; normalise
    // casing and stray whitespace once here.
    for record in &mut records {
        for tag in &mut record.amenities {
            *tag = tag.trim().to_ascii_lowercase();
        }
    }

    let catalog = Catalog::from_records(records)?;
    info!("Loaded catalog with {} records", catalog.len());
    Ok(catalog)
}

/// Load a catalog from a JSON file on disk.
pub fn load_from_file(path: &Path) -> Result<Catalog> {
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&json)
}

/// Load the embedded default dataset.
pub fn load_embedded() -> Result<Catalog> {
    parse_catalog(DEFAULT_DATASET)
}
