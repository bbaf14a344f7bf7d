//! Extension points.

use crate::error::ExtensionError;
use concept_collector::ConceptDataCollector;
use concept_query::ConceptQuery;

/// An input adapter that feeds concepts into a collector.
pub trait ConceptSource {
    fn collect(&self, collector: &mut ConceptDataCollector) -> Result<(), ExtensionError>;
}

/// A step that reads a validated graph, such as a file generator.
pub trait GraphConsumer {
    fn consume(&self, query: &ConceptQuery<'_>) -> Result<(), ExtensionError>;
}

impl<F> ConceptSource for F
where
    F: Fn(&mut ConceptDataCollector) -> Result<(), ExtensionError>,
{
    fn collect(&self, collector: &mut ConceptDataCollector) -> Result<(), ExtensionError> {
        self(collector)
    }
}

impl<F> GraphConsumer for F
where
    F: Fn(&ConceptQuery<'_>) -> Result<(), ExtensionError>,
{
    fn consume(&self, query: &ConceptQuery<'_>) -> Result<(), ExtensionError> {
        self(query)
    }
}
