//! Concept Collector
//!
//! Accumulates raw concept entries while input adapters run. Nothing is
//! checked against the schema here: adapters may populate concepts in any
//! order and refer to identifiers that do not exist yet. Linking and
//! validation happen once collection is complete.

mod collector;
mod data;
mod error;

pub use collector::{ConceptDataCollector, ConceptHandle};
pub use data::ConceptData;
pub use error::{CollectorError, CollectorResult};
