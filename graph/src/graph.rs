//! Concept graph storage.

use crate::index::TypeIndex;
use crate::node::{ConceptNode, Link, NodeIndex};
use concept_core::Identifier;
use std::collections::HashMap;

/// The linked concept graph.
///
/// Owns every node. Relations between nodes are indexes into the arena, so
/// forward references, back references and cycles need no special handling.
/// The graph is never mutated after the builder returns it.
#[derive(Debug, Clone, Default)]
pub struct ConceptGraph {
    /// Node arena, in collection order.
    nodes: Vec<ConceptNode>,
    /// Identifier index.
    by_identifier: HashMap<Identifier, NodeIndex>,
    /// Type index.
    type_index: TypeIndex,
}

impl ConceptGraph {
    pub(crate) fn new(
        nodes: Vec<ConceptNode>,
        by_identifier: HashMap<Identifier, NodeIndex>,
        type_index: TypeIndex,
    ) -> Self {
        Self {
            nodes,
            by_identifier,
            type_index,
        }
    }

    // ==================== Node Lookups ====================

    /// Get a node by arena index.
    pub fn node(&self, index: NodeIndex) -> Option<&ConceptNode> {
        self.nodes.get(index.raw())
    }

    /// Get a node by identifier.
    pub fn get(&self, identifier: &str) -> Option<&ConceptNode> {
        self.index_of(identifier).and_then(|index| self.node(index))
    }

    /// Get the arena index of an identifier.
    pub fn index_of(&self, identifier: &str) -> Option<NodeIndex> {
        self.by_identifier.get(identifier).copied()
    }

    /// Check if a node with this identifier exists.
    pub fn contains(&self, identifier: &str) -> bool {
        self.by_identifier.contains_key(identifier)
    }

    /// Get all nodes in collection order.
    pub fn nodes(&self) -> impl Iterator<Item = &ConceptNode> {
        self.nodes.iter()
    }

    /// Get the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ==================== Type Lookups ====================

    /// Get all nodes of a concept type, in collection order.
    pub fn nodes_of_type<'a>(&'a self, concept_type: &str) -> impl Iterator<Item = &'a ConceptNode> + 'a {
        self.type_index
            .get(concept_type)
            .iter()
            .filter_map(move |&index| self.node(index))
    }

    /// Get the number of nodes of a concept type.
    pub fn count_of_type(&self, concept_type: &str) -> usize {
        self.type_index.count(concept_type)
    }

    // ==================== Relations ====================

    /// Follow a link to its target node.
    pub fn resolve(&self, link: &Link) -> Option<&ConceptNode> {
        link.target.and_then(|index| self.node(index))
    }

    /// Get the parent node of a node.
    pub fn parent_of(&self, node: &ConceptNode) -> Option<&ConceptNode> {
        node.parent.as_ref().and_then(|link| self.resolve(link))
    }
}
