//! Concept Graph
//!
//! This crate provides the linked concept graph and its builder:
//! - Node arena: concepts stored once, cross-referenced by index
//! - Identifier index: find a concept by its identifier
//! - Type index: find concepts by type, in collection order
//! - Data validation errors shared with the validator

mod builder;
mod error;
mod graph;
mod index;
mod node;

pub use builder::GraphBuilder;
pub use error::{ConceptGraphError, GraphResult};
pub use graph::ConceptGraph;
pub use index::TypeIndex;
pub use node::{ConceptNode, Link, NodeIndex, NodeValue};
