//! Concept Tests
//!
//! Scenario-driven integration tests. A scenario names a schema fixture and
//! one or more dataset fixtures, runs them through a session and checks the
//! outcome against a set of expectations.

mod assertion;
mod loader;
mod runner;

pub use assertion::Expect;
pub use error::{ScenarioError, ScenarioResult};
pub use loader::{fixture_path, load_schema, Dataset, DatasetConcept, DatasetSource, DatasetValue};
pub use runner::Runner;
pub use scenario::Scenario;

pub mod prelude {
    pub use crate::{fixture_path, load_schema, Dataset, DatasetSource, Expect, Scenario};
    pub use concept_collector::ConceptDataCollector;
    pub use concept_core::{FacetValue, Identifier, Name};
    pub use concept_graph::{ConceptGraphError, GraphBuilder};
    pub use concept_query::{ConceptQuery, FacetItem};
    pub use concept_schema::{SchemaBuilder, SchemaError, SchemaModel};
    pub use concept_session::{
        ConceptSource, ExtensionError, ExtensionRegistry, GraphConsumer, Session, SessionConfig, SessionError,
    };
    pub use concept_validate::{ValidatedGraph, ValidationMode, Validator};
}
