//! Session pipeline.

use crate::config::SessionConfig;
use crate::error::{ExtensionKind, SessionError, SessionResult};
use crate::extension::{ConceptSource, GraphConsumer};
use crate::registry::ExtensionRegistry;
use concept_collector::ConceptDataCollector;
use concept_graph::GraphBuilder;
use concept_query::ConceptQuery;
use concept_schema::SchemaModel;
use concept_validate::{ValidatedGraph, ValidationMode, Validator};

/// One run of the collect, build, validate and publish pipeline.
pub struct Session<'a> {
    schema: &'a SchemaModel,
    registry: &'a ExtensionRegistry,
    config: SessionConfig,
}

impl<'a> Session<'a> {
    /// Create a new session.
    pub fn new(schema: &'a SchemaModel, registry: &'a ExtensionRegistry, config: SessionConfig) -> Self {
        Self {
            schema,
            registry,
            config,
        }
    }

    pub fn schema(&self) -> &SchemaModel {
        self.schema
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run every stage. Consumers only see a graph that passed validation.
    pub fn run(&self) -> SessionResult<ValidatedGraph> {
        // Resolve consumers up front so a typo fails before any work is done
        let consumers = self.consumers()?;

        let collector = self.collect()?;
        let graph = self.build_and_validate(collector)?;
        self.publish_to(&consumers, &graph)?;

        tracing::info!(nodes = graph.graph().len(), "session complete");
        Ok(graph)
    }

    /// Run the configured sources, in order, into a fresh collector.
    pub fn collect(&self) -> SessionResult<ConceptDataCollector> {
        let sources = self.sources()?;
        let mut collector = ConceptDataCollector::new();

        for (name, source) in sources {
            source
                .collect(&mut collector)
                .map_err(|e| SessionError::extension(ExtensionKind::Source, name, e))?;
            tracing::info!(source = name, concepts = collector.len(), "source collected");
        }

        Ok(collector)
    }

    /// Build the graph and validate it in the configured mode.
    pub fn build_and_validate(&self, collector: ConceptDataCollector) -> SessionResult<ValidatedGraph> {
        let graph = GraphBuilder::new(self.schema).build_from(collector)?;
        tracing::info!(nodes = graph.len(), "graph built");

        let validator = Validator::new(self.schema);
        let validated = match self.config.mode {
            ValidationMode::FailFast => validator.validate(graph)?,
            ValidationMode::Aggregate => validator.validate_all(graph)?,
        };

        tracing::info!(mode = ?self.config.mode, "graph validated");
        Ok(validated)
    }

    /// Hand a validated graph to the configured consumers, in order.
    pub fn publish(&self, graph: &ValidatedGraph) -> SessionResult<()> {
        let consumers = self.consumers()?;
        self.publish_to(&consumers, graph)
    }

    fn publish_to(&self, consumers: &[(&str, &dyn GraphConsumer)], graph: &ValidatedGraph) -> SessionResult<()> {
        let query = ConceptQuery::new(graph);
        for &(name, consumer) in consumers {
            consumer
                .consume(&query)
                .map_err(|e| SessionError::extension(ExtensionKind::Consumer, name, e))?;
            tracing::info!(consumer = name, "graph published");
        }
        Ok(())
    }

    fn sources(&self) -> SessionResult<Vec<(&str, &dyn ConceptSource)>> {
        self.config
            .sources
            .iter()
            .map(|name| {
                self.registry
                    .source(name)
                    .map(|source| (name.as_str(), source))
                    .ok_or_else(|| SessionError::unknown_extension(ExtensionKind::Source, name))
            })
            .collect()
    }

    fn consumers(&self) -> SessionResult<Vec<(&str, &dyn GraphConsumer)>> {
        self.config
            .consumers
            .iter()
            .map(|name| {
                self.registry
                    .consumer(name)
                    .map(|consumer| (name.as_str(), consumer))
                    .ok_or_else(|| SessionError::unknown_extension(ExtensionKind::Consumer, name))
            })
            .collect()
    }
}
