//! Concept views.

use concept_core::{Identifier, Name};
use concept_graph::{ConceptGraph, ConceptNode, NodeValue};
use std::fmt;

/// A borrowed view of one concept in a validated graph.
#[derive(Clone, Copy)]
pub struct ConceptRef<'g> {
    graph: &'g ConceptGraph,
    node: &'g ConceptNode,
}

/// One value of a facet, with references dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetItem<'g> {
    Text(&'g str),
    Concept(ConceptRef<'g>),
}

impl<'g> FacetItem<'g> {
    pub fn as_text(&self) -> Option<&'g str> {
        match self {
            FacetItem::Text(s) => Some(*s),
            FacetItem::Concept(_) => None,
        }
    }

    pub fn as_concept(&self) -> Option<ConceptRef<'g>> {
        match self {
            FacetItem::Text(_) => None,
            FacetItem::Concept(c) => Some(*c),
        }
    }
}

impl<'g> ConceptRef<'g> {
    pub(crate) fn new(graph: &'g ConceptGraph, node: &'g ConceptNode) -> Self {
        Self { graph, node }
    }

    pub fn identifier(&self) -> &'g Identifier {
        &self.node.identifier
    }

    pub fn concept_type(&self) -> &'g Name {
        &self.node.concept_type
    }

    /// Collection sequence number.
    pub fn sequence(&self) -> u64 {
        self.node.sequence
    }

    /// The parent concept, if one was collected.
    pub fn parent(&self) -> Option<ConceptRef<'g>> {
        self.graph
            .parent_of(self.node)
            .map(|node| ConceptRef::new(self.graph, node))
    }

    /// Concepts whose parent is this concept, in collection order.
    pub fn children(&self) -> Vec<ConceptRef<'g>> {
        let index = self.node.index;
        self.graph
            .nodes()
            .filter(|node| node.parent.as_ref().and_then(|link| link.target) == Some(index))
            .map(|node| ConceptRef::new(self.graph, node))
            .collect()
    }

    /// All values of a facet. References come back as the concepts they name.
    pub fn facet(&self, facet: &str) -> Vec<FacetItem<'g>> {
        self.node
            .facet_values(facet)
            .iter()
            .filter_map(|value| self.item(value))
            .collect()
    }

    /// Text values of a facet.
    pub fn texts(&self, facet: &str) -> Vec<&'g str> {
        self.node
            .facet_values(facet)
            .iter()
            .filter_map(NodeValue::as_text)
            .collect()
    }

    /// First text value of a facet.
    pub fn text(&self, facet: &str) -> Option<&'g str> {
        self.node.facet_values(facet).iter().find_map(NodeValue::as_text)
    }

    /// Concepts referenced by a facet.
    pub fn references(&self, facet: &str) -> Vec<ConceptRef<'g>> {
        self.node
            .facet_values(facet)
            .iter()
            .filter_map(|value| self.follow(value))
            .collect()
    }

    /// The underlying graph node.
    pub fn node(&self) -> &'g ConceptNode {
        self.node
    }

    fn item(&self, value: &'g NodeValue) -> Option<FacetItem<'g>> {
        match value.as_text() {
            Some(text) => Some(FacetItem::Text(text)),
            None => self.follow(value).map(FacetItem::Concept),
        }
    }

    fn follow(&self, value: &NodeValue) -> Option<ConceptRef<'g>> {
        value
            .target()
            .and_then(|index| self.graph.node(index))
            .map(|node| ConceptRef::new(self.graph, node))
    }
}

impl PartialEq for ConceptRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.node.index == other.node.index
    }
}

impl Eq for ConceptRef<'_> {}

impl fmt::Debug for ConceptRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConceptRef")
            .field("concept_type", &self.node.concept_type)
            .field("identifier", &self.node.identifier)
            .finish()
    }
}

impl fmt::Display for ConceptRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node.concept_type, self.node.identifier)
    }
}
