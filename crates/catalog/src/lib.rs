//! # Catalog Crate
//!
//! This crate handles loading and indexing the accommodation dataset.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Accommodation, Price, Catalog)
//! - **geo**: Coordinates and great-circle distance
//! - **loader**: Parse catalog JSON files into Rust structs
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::loader;
//!
//! // Load the embedded Ilocos Norte dataset
//! let catalog = loader::load_embedded()?;
//!
//! // Query data
//! let stay = catalog.get(2).unwrap();
//! println!("{} in {} at {}", stay.name, stay.area, stay.price);
//! ```
//!
//! The catalog is loaded once at startup and never mutated; every consumer
//! holds it behind an `Arc` and reads from it concurrently without locking.

// Public modules
pub mod error;
pub mod geo;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use geo::{Coordinate, EARTH_RADIUS_KM};
pub use types::{Accommodation, Catalog, Price, PriceBand, StayId};
