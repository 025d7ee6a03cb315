//! The individual scoring terms.
//!
//! Each submodule implements one additive component of the total score.

mod amenity;
mod area;
mod budget;
mod proximity;
mod rating;
mod trip_type;

pub use amenity::AmenityTerm;
pub use area::AreaTerm;
pub use budget::BudgetTerm;
pub use proximity::ProximityTerm;
pub use rating::RatingTerm;
pub use trip_type::TripTypeTerm;
