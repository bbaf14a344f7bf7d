//! Session error types.

use concept_collector::CollectorError;
use concept_core::NameError;
use concept_graph::ConceptGraphError;
use concept_validate::Violations;
use std::fmt;
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// The two kinds of registered extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionKind {
    Source,
    Consumer,
}

impl fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionKind::Source => write!(f, "source"),
            ExtensionKind::Consumer => write!(f, "consumer"),
        }
    }
}

/// Errors raised by sources and consumers.
#[derive(Debug, Error)]
pub enum ExtensionError {
    /// The source handed the collector something it rejected.
    #[error("collector error: {0}")]
    Collector(#[from] CollectorError),

    /// The source produced an invalid name or identifier.
    #[error("invalid name: {0}")]
    InvalidName(#[from] NameError),

    /// Anything else the extension wants to report.
    #[error("{message}")]
    Failed { message: String },
}

impl ExtensionError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A configured extension is not registered.
    #[error("unknown {kind}: {name}")]
    UnknownExtension { kind: ExtensionKind, name: String },

    /// An extension name was registered twice.
    #[error("duplicate {kind}: {name}")]
    DuplicateExtension { kind: ExtensionKind, name: String },

    /// An extension failed.
    #[error("{kind} {name} failed: {source}")]
    Extension {
        kind: ExtensionKind,
        name: String,
        #[source]
        source: ExtensionError,
    },

    /// Collector misuse.
    #[error("collector error: {0}")]
    Collector(#[from] CollectorError),

    /// Building or fail-fast validation rejected the data.
    #[error("invalid concept data: {0}")]
    Graph(#[from] ConceptGraphError),

    /// Aggregating validation rejected the data.
    #[error("invalid concept data: {0}")]
    Validation(#[from] Violations),

    /// Malformed session configuration.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl SessionError {
    pub fn unknown_extension(kind: ExtensionKind, name: impl Into<String>) -> Self {
        Self::UnknownExtension {
            kind,
            name: name.into(),
        }
    }

    pub fn duplicate_extension(kind: ExtensionKind, name: impl Into<String>) -> Self {
        Self::DuplicateExtension {
            kind,
            name: name.into(),
        }
    }

    pub fn extension(kind: ExtensionKind, name: impl Into<String>, source: ExtensionError) -> Self {
        Self::Extension {
            kind,
            name: name.into(),
            source,
        }
    }
}
