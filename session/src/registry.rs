//! Extension registry.

use crate::error::{ExtensionKind, SessionError, SessionResult};
use crate::extension::{ConceptSource, GraphConsumer};
use std::collections::BTreeMap;
use std::fmt;

/// Named sources and consumers available to a session.
///
/// Built explicitly by the caller and handed to `Session::new`.
#[derive(Default)]
pub struct ExtensionRegistry {
    sources: BTreeMap<String, Box<dyn ConceptSource>>,
    consumers: BTreeMap<String, Box<dyn GraphConsumer>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an input source under a unique name.
    pub fn register_source(
        &mut self,
        name: impl Into<String>,
        source: impl ConceptSource + 'static,
    ) -> SessionResult<()> {
        let name = name.into();
        if self.sources.contains_key(&name) {
            return Err(SessionError::duplicate_extension(ExtensionKind::Source, name));
        }
        tracing::debug!(%name, "source registered");
        self.sources.insert(name, Box::new(source));
        Ok(())
    }

    /// Register a graph consumer under a unique name.
    pub fn register_consumer(
        &mut self,
        name: impl Into<String>,
        consumer: impl GraphConsumer + 'static,
    ) -> SessionResult<()> {
        let name = name.into();
        if self.consumers.contains_key(&name) {
            return Err(SessionError::duplicate_extension(ExtensionKind::Consumer, name));
        }
        tracing::debug!(%name, "consumer registered");
        self.consumers.insert(name, Box::new(consumer));
        Ok(())
    }

    pub fn source(&self, name: &str) -> Option<&dyn ConceptSource> {
        self.sources.get(name).map(Box::as_ref)
    }

    pub fn consumer(&self, name: &str) -> Option<&dyn GraphConsumer> {
        self.consumers.get(name).map(Box::as_ref)
    }

    /// Registered source names, sorted.
    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Registered consumer names, sorted.
    pub fn consumer_names(&self) -> impl Iterator<Item = &str> {
        self.consumers.keys().map(String::as_str)
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("sources", &self.sources.keys().collect::<Vec<_>>())
            .field("consumers", &self.consumers.keys().collect::<Vec<_>>())
            .finish()
    }
}
