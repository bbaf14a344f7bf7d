//! Raw facet values.
//!
//! Values are what input adapters hand to the collector. A value is either
//! free text (which also carries enumeration members) or a reference to
//! another concept by identifier. Whether a value fits the facet it is stored
//! under is decided later, during validation.

use crate::Identifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value stored under a facet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FacetValue {
    /// Free text or an enumeration member.
    Text(String),
    /// Reference to another concept.
    Reference(Identifier),
}

impl FacetValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        FacetValue::Text(value.into())
    }

    /// Create a reference value.
    pub fn reference(identifier: Identifier) -> Self {
        FacetValue::Reference(identifier)
    }

    /// Returns true if this is a text value.
    pub fn is_text(&self) -> bool {
        matches!(self, FacetValue::Text(_))
    }

    /// Returns true if this is a reference value.
    pub fn is_reference(&self) -> bool {
        matches!(self, FacetValue::Reference(_))
    }

    /// Get as string if this is a Text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FacetValue::Text(s) => Some(s),
            FacetValue::Reference(_) => None,
        }
    }

    /// Get as identifier if this is a Reference value.
    pub fn as_reference(&self) -> Option<&Identifier> {
        match self {
            FacetValue::Text(_) => None,
            FacetValue::Reference(id) => Some(id),
        }
    }

    /// Returns the kind name of this value.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FacetValue::Text(_) => "Text",
            FacetValue::Reference(_) => "Reference",
        }
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetValue::Text(s) => write!(f, "\"{}\"", s),
            FacetValue::Reference(id) => write!(f, "@{}", id),
        }
    }
}

impl From<Identifier> for FacetValue {
    fn from(id: Identifier) -> Self {
        FacetValue::Reference(id)
    }
}

impl From<&str> for FacetValue {
    fn from(s: &str) -> Self {
        FacetValue::Text(s.to_string())
    }
}

impl From<String> for FacetValue {
    fn from(s: String) -> Self {
        FacetValue::Text(s)
    }
}
