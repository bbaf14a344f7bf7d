//! The validated graph and validation modes.

use concept_graph::ConceptGraph;
use serde::{Deserialize, Serialize};

/// How violations are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Stop at the first violation.
    #[default]
    FailFast,
    /// Collect every violation before failing.
    Aggregate,
}

/// A concept graph that passed validation.
///
/// Only the validator constructs this, so holding one proves every schema
/// rule held for the wrapped graph.
#[derive(Debug, Clone)]
pub struct ValidatedGraph {
    graph: ConceptGraph,
}

impl ValidatedGraph {
    pub(crate) fn new(graph: ConceptGraph) -> Self {
        Self { graph }
    }

    /// The validated graph.
    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    pub fn into_inner(self) -> ConceptGraph {
        self.graph
    }
}

impl AsRef<ConceptGraph> for ValidatedGraph {
    fn as_ref(&self) -> &ConceptGraph {
        &self.graph
    }
}
