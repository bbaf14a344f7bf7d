//! Indexes for graph lookups.

use crate::NodeIndex;
use concept_core::Name;
use std::collections::HashMap;

/// Type index: concept type -> nodes, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct TypeIndex {
    index: HashMap<Name, Vec<NodeIndex>>,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, concept_type: Name, node: NodeIndex) {
        self.index.entry(concept_type).or_default().push(node);
    }

    pub fn get(&self, concept_type: &str) -> &[NodeIndex] {
        self.index
            .get(concept_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn count(&self, concept_type: &str) -> usize {
        self.get(concept_type).len()
    }
}
