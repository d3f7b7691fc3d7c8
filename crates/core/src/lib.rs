//! `hbnb-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by every HBnB model
//! (no persistence, no HTTP).

pub mod base;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use base::ModelBase;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
pub use value_object::ValueObject;
