//! The SchemaModel - immutable schema lookup.

use crate::descriptor::{ConceptTypeDescriptor, FacetDescriptor, FacetKindDescriptor, SchemaDescriptor};
use crate::error::{SchemaError, SchemaResult};
use crate::types::{ConceptTypeDefinition, FacetDefinition, FacetKind, Occurrence};
use concept_core::Name;
use std::collections::{BTreeSet, HashMap, HashSet};

/// The SchemaModel provides lookup of concept type definitions.
/// It is immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct SchemaModel {
    /// Concept types in declaration order.
    concepts: Vec<ConceptTypeDefinition>,
    /// Position in `concepts` by name.
    by_name: HashMap<Name, usize>,
}

impl SchemaModel {
    /// Validate a list of descriptors and build the model.
    ///
    /// Every descriptor is checked before anything is returned, so reference
    /// targets may name concept types declared later in the list. The first
    /// violation in declaration order is reported.
    pub fn from_descriptors(descriptors: &[ConceptTypeDescriptor]) -> SchemaResult<Self> {
        let declared: HashSet<&str> = descriptors.iter().map(|d| d.name.as_str()).collect();

        let mut concepts = Vec::with_capacity(descriptors.len());
        let mut by_name = HashMap::with_capacity(descriptors.len());

        for descriptor in descriptors {
            let name = Name::new(descriptor.name.as_str())?;
            if by_name.contains_key(&name) {
                return Err(SchemaError::duplicate_concept(name.into_string()));
            }

            let instances = resolve_occurrence(
                &descriptor.name,
                None,
                descriptor.min_instances,
                descriptor.max_instances,
            )?;

            let mut definition = ConceptTypeDefinition::new(name.clone());
            definition.instances = instances;

            for facet in &descriptor.facets {
                let facet = resolve_facet(&definition, facet, &declared)?;
                definition.facets.push(facet);
            }

            by_name.insert(name, concepts.len());
            concepts.push(definition);
        }

        tracing::debug!(concepts = concepts.len(), "schema model built");

        Ok(Self { concepts, by_name })
    }

    /// Validate a schema declaration and build the model.
    pub fn from_descriptor(descriptor: &SchemaDescriptor) -> SchemaResult<Self> {
        Self::from_descriptors(&descriptor.concepts)
    }

    /// Parse a JSON schema declaration and build the model.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let descriptor: SchemaDescriptor = serde_json::from_str(json)?;
        Self::from_descriptor(&descriptor)
    }

    /// Convert back to the declarative form.
    pub fn to_descriptor(&self) -> SchemaDescriptor {
        SchemaDescriptor {
            concepts: self.concepts.iter().map(describe_concept).collect(),
        }
    }

    // ==================== Concept Lookups ====================

    /// Get a concept type definition by name.
    pub fn concept(&self, name: &str) -> Option<&ConceptTypeDefinition> {
        self.by_name.get(name).map(|&i| &self.concepts[i])
    }

    /// Check if a concept type is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get all concept type definitions in declaration order.
    pub fn concepts(&self) -> impl Iterator<Item = &ConceptTypeDefinition> {
        self.concepts.iter()
    }

    /// Get the number of concept types.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Get a facet definition of a concept type.
    pub fn facet(&self, concept: &str, facet: &str) -> Option<&FacetDefinition> {
        self.concept(concept).and_then(|c| c.facet(facet))
    }
}

/// Checks run in order: name pattern, duplicate facet, occurrence, targets.
fn resolve_facet(
    definition: &ConceptTypeDefinition,
    descriptor: &FacetDescriptor,
    declared: &HashSet<&str>,
) -> SchemaResult<FacetDefinition> {
    let concept = definition.name.as_str();
    let name = Name::new(descriptor.name.as_str())?;
    if definition.has_facet(name.as_str()) {
        return Err(SchemaError::duplicate_facet(concept, name.into_string()));
    }

    let occurrence = resolve_occurrence(
        concept,
        Some(descriptor.name.as_str()),
        descriptor.min,
        descriptor.max,
    )?;

    let kind = match &descriptor.kind {
        FacetKindDescriptor::Text => FacetKind::Text,
        FacetKindDescriptor::Enumeration { values } => {
            FacetKind::Enumeration(values.iter().cloned().collect())
        }
        FacetKindDescriptor::Reference { targets } => {
            let mut resolved = BTreeSet::new();
            for target in targets {
                let target_name = Name::new(target.as_str())?;
                if !declared.contains(target.as_str()) {
                    return Err(SchemaError::unknown_target(concept, &descriptor.name, target));
                }
                resolved.insert(target_name);
            }
            FacetKind::Reference(resolved)
        }
    };

    Ok(FacetDefinition::new(name, kind, occurrence))
}

fn resolve_occurrence(
    concept: &str,
    facet: Option<&str>,
    min: i64,
    max: Option<i64>,
) -> SchemaResult<Occurrence> {
    let invalid = || SchemaError::invalid_occurrence(concept, facet, min, max);

    let lower = u32::try_from(min).map_err(|_| invalid())?;
    let upper = match max {
        Some(max) => Some(u32::try_from(max).map_err(|_| invalid())?),
        None => None,
    };

    Occurrence::new(lower, upper).ok_or_else(invalid)
}

fn describe_concept(concept: &ConceptTypeDefinition) -> ConceptTypeDescriptor {
    ConceptTypeDescriptor {
        name: concept.name.to_string(),
        facets: concept.facets.iter().map(describe_facet).collect(),
        min_instances: i64::from(concept.instances.min()),
        max_instances: concept.instances.max().map(i64::from),
    }
}

fn describe_facet(facet: &FacetDefinition) -> FacetDescriptor {
    let kind = match &facet.kind {
        FacetKind::Text => FacetKindDescriptor::Text,
        FacetKind::Enumeration(values) => FacetKindDescriptor::Enumeration {
            values: values.iter().cloned().collect(),
        },
        FacetKind::Reference(targets) => FacetKindDescriptor::Reference {
            targets: targets.iter().map(Name::to_string).collect(),
        },
    };

    FacetDescriptor {
        name: facet.name.to_string(),
        kind,
        min: i64::from(facet.occurrence.min()),
        max: facet.occurrence.max().map(i64::from),
    }
}
