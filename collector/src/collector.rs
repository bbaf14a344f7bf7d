//! The concept data collector.

use crate::data::ConceptData;
use crate::error::{CollectorError, CollectorResult};
use concept_core::{FacetValue, Identifier, Name};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_COLLECTOR: AtomicU64 = AtomicU64::new(0);

/// Handle to an entry in a collector.
///
/// Only valid for the collector that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConceptHandle {
    collector: u64,
    position: usize,
}

impl fmt::Display for ConceptHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}.{}", self.collector, self.position)
    }
}

/// Sequence allocator for collected entries.
#[derive(Debug, Default)]
struct SequenceAllocator {
    next: u64,
}

impl SequenceAllocator {
    fn alloc(&mut self) -> u64 {
        let sequence = self.next;
        self.next += 1;
        sequence
    }
}

/// Accumulates concept entries during a single collection pass.
#[derive(Debug)]
pub struct ConceptDataCollector {
    /// Stamped on every handle this collector issues.
    id: u64,
    /// Entries in collection order.
    entries: Vec<ConceptData>,
    /// Lookup for upsert, keyed by concept type and identifier.
    index: HashMap<(Name, Identifier), ConceptHandle>,
    /// Sequence allocator.
    sequence: SequenceAllocator,
}

impl ConceptDataCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self {
            id: NEXT_COLLECTOR.fetch_add(1, Ordering::Relaxed),
            entries: Vec::new(),
            index: HashMap::new(),
            sequence: SequenceAllocator::default(),
        }
    }

    // ==================== Entry Operations ====================

    /// Get or create the entry for a concept.
    ///
    /// An entry already recorded under the same concept type and identifier
    /// is returned as is, except that a given parent overwrites the stored
    /// one. Reusing an identifier under a different concept type records a
    /// separate entry; the clash is reported when the graph is built.
    pub fn upsert(
        &mut self,
        concept_type: Name,
        identifier: Identifier,
        parent: Option<Identifier>,
    ) -> ConceptHandle {
        let key = (concept_type, identifier);
        if let Some(&handle) = self.index.get(&key) {
            if parent.is_some() {
                self.entries[handle.position].parent = parent;
            }
            return handle;
        }

        let (concept_type, identifier) = key;
        self.push_entry(concept_type, identifier, parent)
    }

    /// Record a new entry unconditionally.
    pub fn add(
        &mut self,
        concept_type: Name,
        identifier: Identifier,
        parent: Option<Identifier>,
    ) -> ConceptHandle {
        self.push_entry(concept_type, identifier, parent)
    }

    fn push_entry(
        &mut self,
        concept_type: Name,
        identifier: Identifier,
        parent: Option<Identifier>,
    ) -> ConceptHandle {
        let handle = ConceptHandle {
            collector: self.id,
            position: self.entries.len(),
        };
        let mut data = ConceptData::new(self.sequence.alloc(), concept_type.clone(), identifier.clone());
        data.parent = parent;

        tracing::trace!(
            sequence = data.sequence,
            concept_type = %concept_type,
            identifier = %identifier,
            "concept collected"
        );

        self.index.entry((concept_type, identifier)).or_insert(handle);
        self.entries.push(data);
        handle
    }

    /// Overwrite the parent of an entry. The last write wins.
    pub fn set_parent(&mut self, handle: ConceptHandle, parent: Option<Identifier>) -> CollectorResult<()> {
        self.entry_mut(handle)?.parent = parent;
        Ok(())
    }

    /// Replace all values of a facet.
    pub fn add_or_replace_facet_values(
        &mut self,
        handle: ConceptHandle,
        facet: Name,
        values: Vec<FacetValue>,
    ) -> CollectorResult<()> {
        self.entry_mut(handle)?.replace_facet_values(facet, values);
        Ok(())
    }

    /// Append one value to a facet, creating it if absent.
    pub fn add_facet_value(
        &mut self,
        handle: ConceptHandle,
        facet: Name,
        value: FacetValue,
    ) -> CollectorResult<()> {
        self.entry_mut(handle)?.push_facet_value(facet, value);
        Ok(())
    }

    fn entry_mut(&mut self, handle: ConceptHandle) -> CollectorResult<&mut ConceptData> {
        if handle.collector != self.id {
            return Err(CollectorError::UnknownHandle(handle));
        }
        self.entries
            .get_mut(handle.position)
            .ok_or(CollectorError::UnknownHandle(handle))
    }

    // ==================== Lookups ====================

    /// Get an entry by handle. Handles from another collector find nothing.
    pub fn get(&self, handle: ConceptHandle) -> Option<&ConceptData> {
        if handle.collector != self.id {
            return None;
        }
        self.entries.get(handle.position)
    }

    /// Find the handle recorded for a concept type and identifier.
    pub fn find(&self, concept_type: &Name, identifier: &Identifier) -> Option<ConceptHandle> {
        self.index
            .get(&(concept_type.clone(), identifier.clone()))
            .copied()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get all entries in collection order.
    pub fn entries(&self) -> impl Iterator<Item = &ConceptData> {
        self.entries.iter()
    }

    /// Consume the collector, returning entries in collection order.
    pub fn into_entries(self) -> Vec<ConceptData> {
        self.entries
    }
}

impl Default for ConceptDataCollector {
    fn default() -> Self {
        Self::new()
    }
}
