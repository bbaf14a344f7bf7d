//! Concept Session
//!
//! Drives the collect, build, validate and publish pipeline.
//!
//! Responsibilities:
//! - Hold named input sources and graph consumers in an explicit registry
//! - Run the configured sources into a fresh collector
//! - Build and validate the graph in the configured mode
//! - Publish a validated graph to the configured consumers

mod config;
mod error;
mod extension;
mod registry;
mod session;

pub use config::SessionConfig;
pub use error::{ExtensionError, ExtensionKind, SessionError, SessionResult};
pub use extension::{ConceptSource, GraphConsumer};
pub use registry::ExtensionRegistry;
pub use session::Session;
