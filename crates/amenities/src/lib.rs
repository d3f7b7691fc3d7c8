//! Amenities domain module.
//!
//! This crate contains the amenity model and its validation rules, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod amenity;
pub mod name;

pub use amenity::Amenity;
pub use name::{AmenityName, NAME_MAX_CHAR_COUNT, validate_name};
