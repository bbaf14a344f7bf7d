//! Declarative schema descriptors.
//!
//! Descriptors are the unvalidated input form of a schema: plain strings and
//! signed bounds, exactly as a caller or a JSON document wrote them. They are
//! turned into a `SchemaModel` by `SchemaModel::from_descriptors`, which is
//! where every check happens.

use serde::{Deserialize, Serialize};

/// A whole schema declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    #[serde(default)]
    pub concepts: Vec<ConceptTypeDescriptor>,
}

/// One concept type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptTypeDescriptor {
    pub name: String,
    #[serde(default)]
    pub facets: Vec<FacetDescriptor>,
    #[serde(default)]
    pub min_instances: i64,
    #[serde(default)]
    pub max_instances: Option<i64>,
}

impl ConceptTypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facets: Vec::new(),
            min_instances: 0,
            max_instances: None,
        }
    }
}

/// One facet declaration.
///
/// An absent `max` means at most one value; an explicit `null` means
/// unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetDescriptor {
    pub name: String,
    pub kind: FacetKindDescriptor,
    #[serde(default)]
    pub min: i64,
    #[serde(default = "default_max")]
    pub max: Option<i64>,
}

fn default_max() -> Option<i64> {
    Some(1)
}

impl FacetDescriptor {
    pub fn new(name: impl Into<String>, kind: FacetKindDescriptor, min: i64, max: Option<i64>) -> Self {
        Self {
            name: name.into(),
            kind,
            min,
            max,
        }
    }
}

/// Value kind of a facet declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FacetKindDescriptor {
    Text,
    Enumeration { values: Vec<String> },
    Reference { targets: Vec<String> },
}
