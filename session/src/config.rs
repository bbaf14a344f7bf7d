//! Session configuration.

use crate::error::SessionResult;
use concept_validate::ValidationMode;
use serde::{Deserialize, Serialize};

/// Which extensions a session runs, and how strictly it validates.
///
/// ```json
/// { "sources": ["Model"], "consumers": ["Docs", "Code"], "mode": "aggregate" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Source names, run in order.
    pub sources: Vec<String>,
    /// Consumer names, run in order.
    pub consumers: Vec<String>,
    /// Validation mode.
    pub mode: ValidationMode,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> SessionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn source(mut self, name: impl Into<String>) -> Self {
        self.sources.push(name.into());
        self
    }

    pub fn consumer(mut self, name: impl Into<String>) -> Self {
        self.consumers.push(name.into());
        self
    }

    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }
}
