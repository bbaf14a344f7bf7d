//! Schema definition types.

use concept_core::{FacetValue, Name};
use std::collections::BTreeSet;
use std::fmt;

/// Inclusive occurrence bounds. `max = None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occurrence {
    min: u32,
    max: Option<u32>,
}

impl Occurrence {
    /// Any number of occurrences, including none.
    pub const ANY: Occurrence = Occurrence { min: 0, max: None };
    /// At most one occurrence.
    pub const OPTIONAL: Occurrence = Occurrence {
        min: 0,
        max: Some(1),
    };
    /// Exactly one occurrence.
    pub const REQUIRED: Occurrence = Occurrence {
        min: 1,
        max: Some(1),
    };

    /// Create bounds, or `None` if `min > max`.
    pub fn new(min: u32, max: Option<u32>) -> Option<Self> {
        match max {
            Some(max) if max < min => None,
            _ => Some(Self { min, max }),
        }
    }

    /// At least `min` occurrences, no upper bound.
    pub fn at_least(min: u32) -> Self {
        Self { min, max: None }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> Option<u32> {
        self.max
    }

    /// Check whether `count` lies within the bounds.
    pub fn contains(&self, count: usize) -> bool {
        let above_min = count >= self.min as usize;
        let below_max = self.max.map_or(true, |max| count <= max as usize);
        above_min && below_max
    }
}

impl Default for Occurrence {
    fn default() -> Self {
        Self::ANY
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..{}", self.min, max),
            None => write!(f, "{}..*", self.min),
        }
    }
}

/// The kind of value a facet holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetKind {
    /// Free text.
    Text,
    /// One of a closed set of strings.
    Enumeration(BTreeSet<String>),
    /// A reference to a concept of one of the given types.
    Reference(BTreeSet<Name>),
}

impl FacetKind {
    /// Returns true if this is a reference facet.
    pub fn is_reference(&self) -> bool {
        matches!(self, FacetKind::Reference(_))
    }

    /// Allowed values if this is an enumeration facet.
    pub fn allowed_values(&self) -> Option<&BTreeSet<String>> {
        match self {
            FacetKind::Enumeration(values) => Some(values),
            _ => None,
        }
    }

    /// Allowed target concept types if this is a reference facet.
    pub fn targets(&self) -> Option<&BTreeSet<Name>> {
        match self {
            FacetKind::Reference(targets) => Some(targets),
            _ => None,
        }
    }

    /// Check whether a raw value fits this kind.
    ///
    /// For references only the shape is checked here; whether the target
    /// exists and has an allowed type is a graph-level question.
    pub fn accepts(&self, value: &FacetValue) -> bool {
        match (self, value) {
            (FacetKind::Text, FacetValue::Text(_)) => true,
            (FacetKind::Enumeration(values), FacetValue::Text(s)) => values.contains(s),
            (FacetKind::Reference(_), FacetValue::Reference(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for FacetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetKind::Text => write!(f, "Text"),
            FacetKind::Enumeration(values) => {
                let values: Vec<&str> = values.iter().map(String::as_str).collect();
                write!(f, "Enumeration[{}]", values.join(", "))
            }
            FacetKind::Reference(targets) => {
                let targets: Vec<&str> = targets.iter().map(Name::as_str).collect();
                write!(f, "Reference[{}]", targets.join(", "))
            }
        }
    }
}

/// Facet definition within a concept type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetDefinition {
    /// Facet name.
    pub name: Name,
    /// Value kind.
    pub kind: FacetKind,
    /// How many values a concept may hold for this facet.
    pub occurrence: Occurrence,
}

impl FacetDefinition {
    pub fn new(name: Name, kind: FacetKind, occurrence: Occurrence) -> Self {
        Self {
            name,
            kind,
            occurrence,
        }
    }
}

/// Concept type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptTypeDefinition {
    /// Concept type name.
    pub name: Name,
    /// Facet definitions in declaration order.
    pub facets: Vec<FacetDefinition>,
    /// How many instances of this type a graph may hold.
    pub instances: Occurrence,
}

impl ConceptTypeDefinition {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            facets: Vec::new(),
            instances: Occurrence::ANY,
        }
    }

    /// Get a facet definition by name.
    pub fn facet(&self, name: &str) -> Option<&FacetDefinition> {
        self.facets.iter().find(|f| f.name == name)
    }

    /// Check if this type declares a facet.
    pub fn has_facet(&self, name: &str) -> bool {
        self.facet(name).is_some()
    }

    /// Get all facet names in declaration order.
    pub fn facet_names(&self) -> impl Iterator<Item = &Name> {
        self.facets.iter().map(|f| &f.name)
    }

    /// Get the reference facets in declaration order.
    pub fn reference_facets(&self) -> impl Iterator<Item = &FacetDefinition> {
        self.facets.iter().filter(|f| f.kind.is_reference())
    }
}
