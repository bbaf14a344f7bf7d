//! Concept Schema
//!
//! The schema model: concept types, their facets, and the occurrence rules
//! that collected data must satisfy. The model is validated eagerly at
//! construction and immutable afterwards.

mod builder;
mod descriptor;
mod error;
mod model;
mod types;

pub use builder::{ConceptBuilder, SchemaBuilder};
pub use descriptor::{ConceptTypeDescriptor, FacetDescriptor, FacetKindDescriptor, SchemaDescriptor};
pub use error::{SchemaError, SchemaResult};
pub use model::SchemaModel;
pub use types::*;
