//! Collected concept entries.

use concept_core::{FacetValue, Identifier, Name};
use std::collections::BTreeMap;

/// One concept as recorded by the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptData {
    /// Position in collection order. Used for ordering only, never identity.
    pub sequence: u64,
    /// Declared concept type.
    pub concept_type: Name,
    /// Instance identifier.
    pub identifier: Identifier,
    /// Parent identifier, if any.
    pub parent: Option<Identifier>,
    /// Facet values by facet name.
    pub facets: BTreeMap<Name, Vec<FacetValue>>,
}

impl ConceptData {
    pub fn new(sequence: u64, concept_type: Name, identifier: Identifier) -> Self {
        Self {
            sequence,
            concept_type,
            identifier,
            parent: None,
            facets: BTreeMap::new(),
        }
    }

    /// Get the values recorded for a facet.
    pub fn facet_values(&self, facet: &str) -> &[FacetValue] {
        self.facets.get(facet).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace all values of a facet.
    pub fn replace_facet_values(&mut self, facet: Name, values: Vec<FacetValue>) {
        self.facets.insert(facet, values);
    }

    /// Append a value to a facet.
    pub fn push_facet_value(&mut self, facet: Name, value: FacetValue) {
        self.facets.entry(facet).or_default().push(value);
    }
}
