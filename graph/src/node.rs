//! Graph nodes and the links between them.
//!
//! Nodes never own each other. A parent or reference is a `Link`: the raw
//! identifier plus, when it resolved, the index of the target in the graph's
//! node arena.

use concept_core::{FacetValue, Identifier, Name};
use std::collections::BTreeMap;
use std::fmt;

/// Position of a node in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn raw(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A relation to another node by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Identifier as collected.
    pub identifier: Identifier,
    /// Resolved target, if the identifier names a node.
    pub target: Option<NodeIndex>,
}

impl Link {
    pub fn new(identifier: Identifier, target: Option<NodeIndex>) -> Self {
        Self { identifier, target }
    }

    pub fn is_resolved(&self) -> bool {
        self.target.is_some()
    }
}

/// A facet value on a node.
///
/// Keeps the raw value so type checks see exactly what was collected. Only
/// references stored under a declared reference facet are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeValue {
    value: FacetValue,
    target: Option<NodeIndex>,
}

impl NodeValue {
    pub fn new(value: FacetValue, target: Option<NodeIndex>) -> Self {
        Self { value, target }
    }

    /// The value as collected.
    pub fn raw(&self) -> &FacetValue {
        &self.value
    }

    /// Get as string if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Get the referenced identifier if this is a reference value.
    pub fn reference(&self) -> Option<&Identifier> {
        self.value.as_reference()
    }

    /// Resolved target of a reference value.
    pub fn target(&self) -> Option<NodeIndex> {
        self.target
    }
}

/// A concept in the built graph.
#[derive(Debug, Clone)]
pub struct ConceptNode {
    /// Position in the graph arena.
    pub index: NodeIndex,
    /// Collection sequence number.
    pub sequence: u64,
    /// Declared concept type.
    pub concept_type: Name,
    /// Instance identifier.
    pub identifier: Identifier,
    /// Parent relation, if a parent was collected.
    pub parent: Option<Link>,
    /// Facet values by facet name.
    pub facets: BTreeMap<Name, Vec<NodeValue>>,
}

impl ConceptNode {
    /// Get the values of a facet.
    pub fn facet_values(&self, facet: &str) -> &[NodeValue] {
        self.facets.get(facet).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Get the number of values recorded for a facet.
    pub fn facet_count(&self, facet: &str) -> usize {
        self.facet_values(facet).len()
    }

    /// Get all facet names used on this node.
    pub fn facet_names(&self) -> impl Iterator<Item = &Name> {
        self.facets.keys()
    }
}
