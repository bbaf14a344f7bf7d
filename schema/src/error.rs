//! Schema construction errors.
//!
//! These describe a malformed schema declaration. They are raised once, when
//! the model is built, and indicate a configuration defect rather than bad
//! input data.

use concept_core::NameError;
use thiserror::Error;

/// Result type for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur during schema construction.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Invalid name pattern: {0}")]
    InvalidNamePattern(#[from] NameError),

    #[error("Duplicate concept definition: {concept}")]
    DuplicateConceptDefinition { concept: String },

    #[error("Duplicate facet definition: {facet} on concept {concept}")]
    DuplicateFacetDefinition { concept: String, facet: String },

    #[error(
        "Invalid occurrence range {min}..{} on {}",
        format_max(.max),
        format_location(.concept, .facet)
    )]
    InvalidOccurrenceRange {
        concept: String,
        facet: Option<String>,
        min: i64,
        max: Option<i64>,
    },

    #[error("Unknown referenced concept type: {target} in facet {facet} of concept {concept}")]
    UnknownReferencedConceptType {
        concept: String,
        facet: String,
        target: String,
    },

    #[error("Malformed schema descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),
}

fn format_max(max: &Option<i64>) -> String {
    match max {
        Some(max) => max.to_string(),
        None => "*".to_string(),
    }
}

fn format_location(concept: &str, facet: &Option<String>) -> String {
    match facet {
        Some(facet) => format!("facet {} of concept {}", facet, concept),
        None => format!("instances of concept {}", concept),
    }
}

impl SchemaError {
    pub fn duplicate_concept(concept: impl Into<String>) -> Self {
        Self::DuplicateConceptDefinition {
            concept: concept.into(),
        }
    }

    pub fn duplicate_facet(concept: impl Into<String>, facet: impl Into<String>) -> Self {
        Self::DuplicateFacetDefinition {
            concept: concept.into(),
            facet: facet.into(),
        }
    }

    pub fn invalid_occurrence(
        concept: impl Into<String>,
        facet: Option<&str>,
        min: i64,
        max: Option<i64>,
    ) -> Self {
        Self::InvalidOccurrenceRange {
            concept: concept.into(),
            facet: facet.map(str::to_string),
            min,
            max,
        }
    }

    pub fn unknown_target(
        concept: impl Into<String>,
        facet: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::UnknownReferencedConceptType {
            concept: concept.into(),
            facet: facet.into(),
            target: target.into(),
        }
    }

    /// The concept the error is about, if it names one.
    pub fn concept(&self) -> Option<&str> {
        match self {
            SchemaError::DuplicateConceptDefinition { concept }
            | SchemaError::DuplicateFacetDefinition { concept, .. }
            | SchemaError::InvalidOccurrenceRange { concept, .. }
            | SchemaError::UnknownReferencedConceptType { concept, .. } => Some(concept),
            SchemaError::InvalidNamePattern(_) | SchemaError::Descriptor(_) => None,
        }
    }

    /// The facet the error is about, if it names one.
    pub fn facet(&self) -> Option<&str> {
        match self {
            SchemaError::DuplicateFacetDefinition { facet, .. }
            | SchemaError::UnknownReferencedConceptType { facet, .. } => Some(facet),
            SchemaError::InvalidOccurrenceRange { facet, .. } => facet.as_deref(),
            _ => None,
        }
    }
}
