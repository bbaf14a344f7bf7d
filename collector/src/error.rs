//! Collector error types.

use crate::ConceptHandle;
use thiserror::Error;

/// Result type for collector operations.
pub type CollectorResult<T> = Result<T, CollectorError>;

/// Errors that can occur during collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectorError {
    /// The handle was not issued by this collector.
    #[error("Unknown concept handle: {0}")]
    UnknownHandle(ConceptHandle),
}
