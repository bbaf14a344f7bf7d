//! GraphBuilder: links collected entries into a ConceptGraph.

use crate::error::{ConceptGraphError, GraphResult};
use crate::graph::ConceptGraph;
use crate::index::TypeIndex;
use crate::node::{ConceptNode, Link, NodeIndex, NodeValue};
use concept_collector::{ConceptData, ConceptDataCollector};
use concept_core::Identifier;
use concept_schema::SchemaModel;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// Builds a ConceptGraph from collected entries.
///
/// Building is a pure linking pass. The only error it reports is an
/// identifier used by two entries, since identifiers are what every link is
/// resolved by. Unknown types, unknown facets, mis-typed values and dangling
/// links are carried into the graph for the validator to report.
pub struct GraphBuilder<'s> {
    schema: &'s SchemaModel,
}

impl<'s> GraphBuilder<'s> {
    /// Create a new builder.
    pub fn new(schema: &'s SchemaModel) -> Self {
        Self { schema }
    }

    /// Build the graph from everything a collector recorded.
    pub fn build_from(&self, collector: ConceptDataCollector) -> GraphResult<ConceptGraph> {
        self.build(collector.into_entries())
    }

    /// Build the graph from collected entries.
    pub fn build(&self, entries: impl IntoIterator<Item = ConceptData>) -> GraphResult<ConceptGraph> {
        let mut entries: Vec<ConceptData> = entries.into_iter().collect();
        entries.sort_by_key(|entry| entry.sequence);

        // Index by identifier
        let mut by_identifier: HashMap<Identifier, NodeIndex> = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            match by_identifier.entry(entry.identifier.clone()) {
                Entry::Occupied(_) => {
                    return Err(ConceptGraphError::DuplicateConceptIdentifierFound {
                        concept_type: entry.concept_type.clone(),
                        identifier: entry.identifier.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(NodeIndex::new(position));
                }
            }
        }

        let resolve = |identifier: &Identifier| by_identifier.get(identifier).copied();

        let mut nodes = Vec::with_capacity(entries.len());
        let mut type_index = TypeIndex::new();
        let mut unresolved = 0usize;

        for (position, entry) in entries.into_iter().enumerate() {
            let index = NodeIndex::new(position);
            let definition = self.schema.concept(entry.concept_type.as_str());

            // Resolve parent
            let parent = entry.parent.map(|identifier| {
                let target = resolve(&identifier);
                if target.is_none() {
                    unresolved += 1;
                }
                Link::new(identifier, target)
            });

            // Resolve values of declared reference facets
            let mut facets = BTreeMap::new();
            for (facet, values) in entry.facets {
                let links = definition
                    .and_then(|d| d.facet(facet.as_str()))
                    .map_or(false, |f| f.kind.is_reference());

                let values: Vec<NodeValue> = values
                    .into_iter()
                    .map(|value| {
                        let target = if links {
                            let target = value.as_reference().and_then(|id| resolve(id));
                            if value.is_reference() && target.is_none() {
                                unresolved += 1;
                            }
                            target
                        } else {
                            None
                        };
                        NodeValue::new(value, target)
                    })
                    .collect();

                facets.insert(facet, values);
            }

            type_index.insert(entry.concept_type.clone(), index);
            nodes.push(ConceptNode {
                index,
                sequence: entry.sequence,
                concept_type: entry.concept_type,
                identifier: entry.identifier,
                parent,
                facets,
            });
        }

        tracing::debug!(nodes = nodes.len(), unresolved, "concept graph built");

        Ok(ConceptGraph::new(nodes, by_identifier, type_index))
    }
}
