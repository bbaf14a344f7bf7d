//! SchemaBuilder for constructing an immutable SchemaModel.

use crate::descriptor::{ConceptTypeDescriptor, FacetDescriptor, FacetKindDescriptor};
use crate::error::SchemaResult;
use crate::model::SchemaModel;

/// Builder for constructing an immutable SchemaModel.
///
/// The builder only records declarations. All checks run in `build`, over
/// the complete set, so declaration order does not matter.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    /// Concept types declared so far.
    concepts: Vec<ConceptTypeDescriptor>,
}

impl SchemaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a concept type definition.
    pub fn concept(&mut self, name: impl Into<String>) -> ConceptBuilder<'_> {
        ConceptBuilder {
            builder: self,
            descriptor: ConceptTypeDescriptor::new(name),
        }
    }

    /// Add a concept type from a ready-made descriptor.
    pub fn descriptor(&mut self, descriptor: ConceptTypeDescriptor) -> &mut Self {
        self.concepts.push(descriptor);
        self
    }

    /// Build the immutable SchemaModel.
    pub fn build(self) -> SchemaResult<SchemaModel> {
        SchemaModel::from_descriptors(&self.concepts)
    }
}

/// Builder for a concept type definition.
pub struct ConceptBuilder<'a> {
    builder: &'a mut SchemaBuilder,
    descriptor: ConceptTypeDescriptor,
}

impl<'a> ConceptBuilder<'a> {
    /// Add a free-text facet.
    pub fn text(self, name: impl Into<String>, min: i64, max: Option<i64>) -> Self {
        self.facet(FacetDescriptor::new(name, FacetKindDescriptor::Text, min, max))
    }

    /// Add an enumeration facet.
    pub fn enumeration<I, S>(self, name: impl Into<String>, values: I, min: i64, max: Option<i64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kind = FacetKindDescriptor::Enumeration {
            values: values.into_iter().map(Into::into).collect(),
        };
        self.facet(FacetDescriptor::new(name, kind, min, max))
    }

    /// Add a reference facet.
    pub fn reference<I, S>(self, name: impl Into<String>, targets: I, min: i64, max: Option<i64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kind = FacetKindDescriptor::Reference {
            targets: targets.into_iter().map(Into::into).collect(),
        };
        self.facet(FacetDescriptor::new(name, kind, min, max))
    }

    /// Add a facet from a descriptor.
    pub fn facet(mut self, facet: FacetDescriptor) -> Self {
        self.descriptor.facets.push(facet);
        self
    }

    /// Bound the number of instances of this type across a graph.
    pub fn instances(mut self, min: i64, max: Option<i64>) -> Self {
        self.descriptor.min_instances = min;
        self.descriptor.max_instances = max;
        self
    }

    /// Finish building this concept type.
    pub fn done(self) -> &'a mut SchemaBuilder {
        self.builder.concepts.push(self.descriptor);
        self.builder
    }
}
