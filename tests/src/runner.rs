//! Scenario runner.

use concept_session::{ExtensionRegistry, Session, SessionConfig};

use crate::error::{ScenarioError, ScenarioResult};
use crate::loader::{load_schema, DatasetSource};
use crate::scenario::Scenario;

/// Runs a scenario through a session.
pub struct Runner<'s> {
    scenario: &'s Scenario,
}

impl<'s> Runner<'s> {
    pub fn new(scenario: &'s Scenario) -> Self {
        Self { scenario }
    }

    /// Run the scenario.
    pub fn run(&self) -> ScenarioResult<()> {
        // 1. Load the schema
        let schema_path = self
            .scenario
            .schema_path()
            .ok_or_else(|| ScenarioError::missing_schema(self.scenario.name()))?;
        let schema = load_schema(schema_path)?;

        // 2. Register one source per dataset, named after its fixture path
        let mut registry = ExtensionRegistry::new();
        let mut config = SessionConfig::new().mode(self.scenario.validation_mode());
        for path in self.scenario.datasets() {
            let source = DatasetSource::load(path)?;
            registry
                .register_source(path.as_str(), source)
                .map_err(|e| ScenarioError::setup(e.to_string()))?;
            config = config.source(path.as_str());
        }

        // 3. Run the session and verify
        let outcome = Session::new(&schema, &registry, config).run();
        self.scenario
            .expectations()
            .verify(self.scenario.name(), &outcome)
    }
}
