//! Concept Graph Core Types
//!
//! This crate provides the foundational types used throughout the engine:
//! - Validated tokens (Name, Identifier)
//! - Raw facet values as produced by input adapters (FacetValue)
//! - Name construction errors

mod error;
mod name;
mod value;

pub use error::*;
pub use name::*;
pub use value::*;
