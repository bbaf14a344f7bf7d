//! Data validation errors.
//!
//! One closed set of error kinds covers everything that can be wrong with a
//! collected dataset: the duplicate identifier detected while building, and
//! every structural and referential violation detected while validating.
//! Each variant carries the concept, facet and identifiers involved as typed
//! fields.

use concept_core::{FacetValue, Identifier, Name};
use concept_schema::{FacetKind, Occurrence};
use thiserror::Error;

/// Result type for graph building.
pub type GraphResult<T> = Result<T, ConceptGraphError>;

/// Errors found in collected concept data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConceptGraphError {
    #[error("Duplicate concept identifier found: {identifier} (concept type {concept_type})")]
    DuplicateConceptIdentifierFound {
        concept_type: Name,
        identifier: Identifier,
    },

    #[error("Unknown concept type {concept_type} for concept {identifier}")]
    UnknownConcept {
        concept_type: Name,
        identifier: Identifier,
    },

    #[error("Unknown facet {facet} on concept {identifier} of type {concept_type}")]
    UnknownFacetName {
        concept_type: Name,
        identifier: Identifier,
        facet: Name,
    },

    #[error(
        "Wrong cardinality for facet {facet} on concept {identifier}: expected {expected}, found {actual}"
    )]
    WrongCardinalityForFacetValue {
        concept_type: Name,
        identifier: Identifier,
        facet: Name,
        expected: Occurrence,
        actual: usize,
    },

    #[error("Wrong type for facet {facet} on concept {identifier}: {value} is not {expected}")]
    WrongTypeForFacetValue {
        concept_type: Name,
        identifier: Identifier,
        facet: Name,
        value: FacetValue,
        expected: FacetKind,
    },

    #[error("Parent concept {parent} of concept {identifier} not found")]
    ParentConceptNotFound {
        concept_type: Name,
        identifier: Identifier,
        parent: Identifier,
    },

    #[error("Concept {reference} referenced by facet {facet} of concept {identifier} not found")]
    ReferencedConceptNodeNotFound {
        concept_type: Name,
        identifier: Identifier,
        facet: Name,
        reference: Identifier,
    },

    #[error(
        "Concept {reference} referenced by facet {facet} of concept {identifier} has type {actual_type}, expected one of [{}]",
        join(.allowed)
    )]
    WrongReferencedConceptFacetValue {
        concept_type: Name,
        identifier: Identifier,
        facet: Name,
        reference: Identifier,
        actual_type: Name,
        allowed: Vec<Name>,
    },

    #[error(
        "Concept type {concept_type} expects {expected} instances, found {} [{}]",
        count(.actual),
        join(.actual)
    )]
    OccurrenceRange {
        concept_type: Name,
        expected: Occurrence,
        actual: Vec<Identifier>,
    },
}

fn join<T: AsRef<str>>(items: &[T]) -> String {
    items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
}

fn count<T>(items: &[T]) -> usize {
    items.len()
}

impl ConceptGraphError {
    /// The concept type the error is about.
    pub fn concept_type(&self) -> &Name {
        match self {
            ConceptGraphError::DuplicateConceptIdentifierFound { concept_type, .. }
            | ConceptGraphError::UnknownConcept { concept_type, .. }
            | ConceptGraphError::UnknownFacetName { concept_type, .. }
            | ConceptGraphError::WrongCardinalityForFacetValue { concept_type, .. }
            | ConceptGraphError::WrongTypeForFacetValue { concept_type, .. }
            | ConceptGraphError::ParentConceptNotFound { concept_type, .. }
            | ConceptGraphError::ReferencedConceptNodeNotFound { concept_type, .. }
            | ConceptGraphError::WrongReferencedConceptFacetValue { concept_type, .. }
            | ConceptGraphError::OccurrenceRange { concept_type, .. } => concept_type,
        }
    }

    /// The offending concept, unless the error is about a whole type.
    pub fn identifier(&self) -> Option<&Identifier> {
        match self {
            ConceptGraphError::DuplicateConceptIdentifierFound { identifier, .. }
            | ConceptGraphError::UnknownConcept { identifier, .. }
            | ConceptGraphError::UnknownFacetName { identifier, .. }
            | ConceptGraphError::WrongCardinalityForFacetValue { identifier, .. }
            | ConceptGraphError::WrongTypeForFacetValue { identifier, .. }
            | ConceptGraphError::ParentConceptNotFound { identifier, .. }
            | ConceptGraphError::ReferencedConceptNodeNotFound { identifier, .. }
            | ConceptGraphError::WrongReferencedConceptFacetValue { identifier, .. } => {
                Some(identifier)
            }
            ConceptGraphError::OccurrenceRange { .. } => None,
        }
    }

    /// The offending facet, for facet-level errors.
    pub fn facet(&self) -> Option<&Name> {
        match self {
            ConceptGraphError::UnknownFacetName { facet, .. }
            | ConceptGraphError::WrongCardinalityForFacetValue { facet, .. }
            | ConceptGraphError::WrongTypeForFacetValue { facet, .. }
            | ConceptGraphError::ReferencedConceptNodeNotFound { facet, .. }
            | ConceptGraphError::WrongReferencedConceptFacetValue { facet, .. } => Some(facet),
            _ => None,
        }
    }
}
