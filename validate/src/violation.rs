//! Validation violation types.

use concept_graph::ConceptGraphError;
use std::fmt;
use thiserror::Error;

/// The validator pass that found a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationPass {
    /// Per-node checks: types, facet names, cardinality, value kinds.
    Structural,
    /// Graph-wide checks: parents, references, instance counts.
    Referential,
}

impl fmt::Display for ValidationPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPass::Structural => write!(f, "structural"),
            ValidationPass::Referential => write!(f, "referential"),
        }
    }
}

/// A single validation violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The pass that found it.
    pub pass: ValidationPass,
    /// What is wrong.
    pub error: ConceptGraphError,
}

impl Violation {
    /// Create a new violation.
    pub fn new(pass: ValidationPass, error: ConceptGraphError) -> Self {
        Self { pass, error }
    }

    /// Create a structural violation.
    pub fn structural(error: ConceptGraphError) -> Self {
        Self::new(ValidationPass::Structural, error)
    }

    /// Create a referential violation.
    pub fn referential(error: ConceptGraphError) -> Self {
        Self::new(ValidationPass::Referential, error)
    }

    pub fn is_structural(&self) -> bool {
        matches!(self.pass, ValidationPass::Structural)
    }

    pub fn is_referential(&self) -> bool {
        matches!(self.pass, ValidationPass::Referential)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.pass, self.error)
    }
}

/// Collection of violations, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} validation violation(s){}", .violations.len(), summary(.violations))]
pub struct Violations {
    violations: Vec<Violation>,
}

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("\n  {v}"))
        .collect()
}

impl Violations {
    /// Create a new empty violations collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Check if there are any violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get all violations.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// The first violation found, which is what fail-fast mode reports.
    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    /// Get structural violations.
    pub fn structural(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_structural())
    }

    /// Get referential violations.
    pub fn referential(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_referential())
    }

    /// Get the underlying errors.
    pub fn errors(&self) -> impl Iterator<Item = &ConceptGraphError> {
        self.violations.iter().map(|v| &v.error)
    }

    /// Get the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Merge another violations collection.
    pub fn merge(&mut self, other: Violations) {
        self.violations.extend(other.violations);
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
