//! Fixture loading.
//!
//! Schemas are the JSON descriptor format understood by `SchemaModel`.
//! Datasets list concepts in collection order:
//!
//! ```json
//! { "concepts": [
//!     { "type": "Book", "id": "B1", "parent": "L1",
//!       "facets": { "Title": ["Dune"], "Author": [{ "ref": "A1" }] } } ] }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use concept_collector::ConceptDataCollector;
use concept_core::{FacetValue, Identifier, Name};
use concept_schema::SchemaModel;
use concept_session::{ConceptSource, ExtensionError};
use serde::Deserialize;

use crate::error::{ScenarioError, ScenarioResult};

/// Resolve a path relative to the fixtures directory.
pub fn fixture_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(relative)
}

fn read(path: &Path) -> ScenarioResult<String> {
    fs::read_to_string(path).map_err(|e| ScenarioError::file_read(path, e))
}

/// Load and validate a schema fixture.
pub fn load_schema(relative: &str) -> ScenarioResult<SchemaModel> {
    let path = fixture_path(relative);
    let json = read(&path)?;
    SchemaModel::from_json(&json).map_err(|e| ScenarioError::schema(&path, e.to_string()))
}

/// A dataset fixture.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    pub concepts: Vec<DatasetConcept>,
}

/// One concept in a dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConcept {
    #[serde(rename = "type")]
    pub concept_type: String,
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub facets: BTreeMap<String, Vec<DatasetValue>>,
}

/// A facet value: a bare string, or `{ "ref": "Id" }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DatasetValue {
    Text(String),
    Reference {
        #[serde(rename = "ref")]
        reference: String,
    },
}

impl Dataset {
    /// Load a dataset fixture.
    pub fn load(relative: &str) -> ScenarioResult<Self> {
        let path = fixture_path(relative);
        let json = read(&path)?;
        serde_json::from_str(&json).map_err(|e| ScenarioError::dataset(&path, e.to_string()))
    }
}

/// Feeds a dataset into a collector, the way a file ingestion adapter would.
#[derive(Debug, Clone)]
pub struct DatasetSource {
    dataset: Dataset,
}

impl DatasetSource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn load(relative: &str) -> ScenarioResult<Self> {
        Dataset::load(relative).map(Self::new)
    }
}

impl ConceptSource for DatasetSource {
    fn collect(&self, collector: &mut ConceptDataCollector) -> Result<(), ExtensionError> {
        for concept in &self.dataset.concepts {
            let parent = concept.parent.as_deref().map(Identifier::new).transpose()?;
            let handle = collector.upsert(
                Name::new(concept.concept_type.as_str())?,
                Identifier::new(concept.id.as_str())?,
                parent,
            );

            for (facet, values) in &concept.facets {
                let facet = Name::new(facet.as_str())?;
                for value in values {
                    let value = match value {
                        DatasetValue::Text(text) => FacetValue::text(text.as_str()),
                        DatasetValue::Reference { reference } => {
                            FacetValue::reference(Identifier::new(reference.as_str())?)
                        }
                    };
                    collector.add_facet_value(handle, facet.clone(), value)?;
                }
            }
        }
        Ok(())
    }
}
