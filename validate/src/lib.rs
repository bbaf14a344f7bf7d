//! Concept Validate
//!
//! Check a built concept graph against the schema model.
//!
//! Responsibilities:
//! - Structural checks per node (types, facet names, cardinality, value kinds)
//! - Referential checks across the graph (parents, references, instance counts)
//! - Fail-fast and aggregating reporting
//! - Hand out `ValidatedGraph`, the only graph the query layer accepts

mod validated;
mod validator;
mod violation;

pub use validated::{ValidatedGraph, ValidationMode};
pub use validator::Validator;
pub use violation::{ValidationPass, Violation, Violations};
