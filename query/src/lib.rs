//! Concept Query
//!
//! Read access to a validated concept graph.
//!
//! Every lookup is total: the graph has already passed validation, so every
//! link a query follows resolves and every value has the declared kind.

mod concept;
mod query;

pub use concept::{ConceptRef, FacetItem};
pub use query::ConceptQuery;
