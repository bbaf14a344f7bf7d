//! Common error types for name construction.

use std::fmt;
use thiserror::Error;

/// Which token rule a string was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// Concept-type and facet names.
    Name,
    /// Concept instance identifiers.
    Identifier,
}

impl NameKind {
    /// The pattern a token of this kind must match.
    pub fn pattern(&self) -> &'static str {
        match self {
            NameKind::Name => crate::name::NAME_PATTERN,
            NameKind::Identifier => crate::name::IDENTIFIER_PATTERN,
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Name => write!(f, "name"),
            NameKind::Identifier => write!(f, "identifier"),
        }
    }
}

/// Errors that can occur when constructing a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The value does not match the token pattern.
    #[error("Invalid {kind} '{value}': must match {}", kind.pattern())]
    InvalidPattern { kind: NameKind, value: String },
}

impl NameError {
    pub fn invalid_pattern(kind: NameKind, value: impl Into<String>) -> Self {
        Self::InvalidPattern {
            kind,
            value: value.into(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        match self {
            NameError::InvalidPattern { value, .. } => value,
        }
    }

    /// The rule the input was checked against.
    pub fn kind(&self) -> NameKind {
        match self {
            NameError::InvalidPattern { kind, .. } => *kind,
        }
    }
}

/// Result type for name construction.
pub type NameResult<T> = Result<T, NameError>;
