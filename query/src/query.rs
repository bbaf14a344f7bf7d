//! Query entry point.

use crate::concept::ConceptRef;
use concept_graph::ConceptGraph;
use concept_validate::ValidatedGraph;

/// Read-only queries over a validated concept graph.
#[derive(Debug, Clone, Copy)]
pub struct ConceptQuery<'g> {
    graph: &'g ConceptGraph,
}

impl<'g> ConceptQuery<'g> {
    /// Create a query over a validated graph.
    pub fn new(graph: &'g ValidatedGraph) -> Self {
        Self {
            graph: graph.graph(),
        }
    }

    /// All concepts of a type, in collection order.
    pub fn concepts_of_type(&self, concept_type: &str) -> Vec<ConceptRef<'g>> {
        self.graph
            .nodes_of_type(concept_type)
            .map(|node| ConceptRef::new(self.graph, node))
            .collect()
    }

    /// Look up a concept by identifier.
    pub fn concept(&self, identifier: &str) -> Option<ConceptRef<'g>> {
        self.graph
            .get(identifier)
            .map(|node| ConceptRef::new(self.graph, node))
    }

    /// Concepts without a parent, in collection order.
    pub fn roots(&self) -> Vec<ConceptRef<'g>> {
        self.graph
            .nodes()
            .filter(|node| node.parent.is_none())
            .map(|node| ConceptRef::new(self.graph, node))
            .collect()
    }

    /// All concepts, in collection order.
    pub fn concepts(&self) -> impl Iterator<Item = ConceptRef<'g>> + 'g {
        let graph = self.graph;
        graph.nodes().map(move |node| ConceptRef::new(graph, node))
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}
