//! Graph validation.

use crate::validated::{ValidatedGraph, ValidationMode};
use crate::violation::{ValidationPass, Violation, Violations};
use concept_graph::{ConceptGraph, ConceptGraphError, ConceptNode};
use concept_schema::{ConceptTypeDefinition, SchemaModel};

/// Signals that a fail-fast run found its violation.
struct Halt;

/// Where checks report what they find.
struct Sink {
    mode: ValidationMode,
    violations: Violations,
}

impl Sink {
    fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            violations: Violations::new(),
        }
    }

    fn report(&mut self, pass: ValidationPass, error: ConceptGraphError) -> Result<(), Halt> {
        self.violations.push(Violation::new(pass, error));
        match self.mode {
            ValidationMode::FailFast => Err(Halt),
            ValidationMode::Aggregate => Ok(()),
        }
    }
}

/// Graph validator.
///
/// Runs two passes. The structural pass checks every node on its own
/// against its concept type. The referential pass then checks parents,
/// references and instance counts, which only make sense once every node is
/// known to be well-formed.
pub struct Validator<'s> {
    schema: &'s SchemaModel,
}

impl<'s> Validator<'s> {
    /// Create a new validator.
    pub fn new(schema: &'s SchemaModel) -> Self {
        Self { schema }
    }

    /// Validate a graph, stopping at the first violation.
    pub fn validate(&self, graph: ConceptGraph) -> Result<ValidatedGraph, ConceptGraphError> {
        let violations = self.check(&graph, ValidationMode::FailFast);
        match violations.into_iter().next() {
            Some(violation) => {
                tracing::warn!(error = %violation.error, "concept graph rejected");
                Err(violation.error)
            }
            None => Ok(self.accept(graph)),
        }
    }

    /// Validate a graph, reporting every violation on failure.
    pub fn validate_all(&self, graph: ConceptGraph) -> Result<ValidatedGraph, Violations> {
        let violations = self.diagnose(&graph);
        if violations.is_empty() {
            Ok(self.accept(graph))
        } else {
            tracing::warn!(violations = violations.len(), "concept graph rejected");
            Err(violations)
        }
    }

    /// Collect every violation in a graph without consuming it.
    ///
    /// The referential pass only runs when the structural pass is clean.
    pub fn diagnose(&self, graph: &ConceptGraph) -> Violations {
        self.check(graph, ValidationMode::Aggregate)
    }

    /// Run both passes in the given mode.
    pub fn check(&self, graph: &ConceptGraph, mode: ValidationMode) -> Violations {
        let mut sink = Sink::new(mode);

        let halted = self.check_structure(graph, &mut sink).is_err();
        if !halted && sink.violations.is_empty() {
            // A halt here only ends the run early
            let _ = self.check_references(graph, &mut sink);
        }

        tracing::debug!(
            nodes = graph.len(),
            violations = sink.violations.len(),
            ?mode,
            "concept graph checked"
        );
        sink.violations
    }

    fn accept(&self, graph: ConceptGraph) -> ValidatedGraph {
        tracing::debug!(nodes = graph.len(), "concept graph validated");
        ValidatedGraph::new(graph)
    }

    // ==================== Structural Pass ====================

    fn check_structure(&self, graph: &ConceptGraph, sink: &mut Sink) -> Result<(), Halt> {
        for node in graph.nodes() {
            match self.schema.concept(node.concept_type.as_str()) {
                Some(definition) => self.check_node(node, definition, sink)?,
                None => sink.report(
                    ValidationPass::Structural,
                    ConceptGraphError::UnknownConcept {
                        concept_type: node.concept_type.clone(),
                        identifier: node.identifier.clone(),
                    },
                )?,
            }
        }
        Ok(())
    }

    fn check_node(
        &self,
        node: &ConceptNode,
        definition: &ConceptTypeDefinition,
        sink: &mut Sink,
    ) -> Result<(), Halt> {
        // Undeclared facets, in name order
        for facet in node.facet_names() {
            if !definition.has_facet(facet.as_str()) {
                sink.report(
                    ValidationPass::Structural,
                    ConceptGraphError::UnknownFacetName {
                        concept_type: node.concept_type.clone(),
                        identifier: node.identifier.clone(),
                        facet: facet.clone(),
                    },
                )?;
            }
        }

        // Declared facets, in declaration order
        for facet in &definition.facets {
            let values = node.facet_values(facet.name.as_str());

            if !facet.occurrence.contains(values.len()) {
                sink.report(
                    ValidationPass::Structural,
                    ConceptGraphError::WrongCardinalityForFacetValue {
                        concept_type: node.concept_type.clone(),
                        identifier: node.identifier.clone(),
                        facet: facet.name.clone(),
                        expected: facet.occurrence,
                        actual: values.len(),
                    },
                )?;
            }

            for value in values {
                if !facet.kind.accepts(value.raw()) {
                    sink.report(
                        ValidationPass::Structural,
                        ConceptGraphError::WrongTypeForFacetValue {
                            concept_type: node.concept_type.clone(),
                            identifier: node.identifier.clone(),
                            facet: facet.name.clone(),
                            value: value.raw().clone(),
                            expected: facet.kind.clone(),
                        },
                    )?;
                }
            }
        }

        Ok(())
    }

    // ==================== Referential Pass ====================

    fn check_references(&self, graph: &ConceptGraph, sink: &mut Sink) -> Result<(), Halt> {
        for node in graph.nodes() {
            if let Some(parent) = &node.parent {
                if !parent.is_resolved() {
                    sink.report(
                        ValidationPass::Referential,
                        ConceptGraphError::ParentConceptNotFound {
                            concept_type: node.concept_type.clone(),
                            identifier: node.identifier.clone(),
                            parent: parent.identifier.clone(),
                        },
                    )?;
                }
            }

            if let Some(definition) = self.schema.concept(node.concept_type.as_str()) {
                self.check_node_references(graph, node, definition, sink)?;
            }
        }

        self.check_instance_counts(graph, sink)
    }

    fn check_node_references(
        &self,
        graph: &ConceptGraph,
        node: &ConceptNode,
        definition: &ConceptTypeDefinition,
        sink: &mut Sink,
    ) -> Result<(), Halt> {
        for facet in definition.reference_facets() {
            let Some(targets) = facet.kind.targets() else {
                continue;
            };

            for value in node.facet_values(facet.name.as_str()) {
                let Some(reference) = value.reference() else {
                    continue;
                };

                match value.target().and_then(|index| graph.node(index)) {
                    None => sink.report(
                        ValidationPass::Referential,
                        ConceptGraphError::ReferencedConceptNodeNotFound {
                            concept_type: node.concept_type.clone(),
                            identifier: node.identifier.clone(),
                            facet: facet.name.clone(),
                            reference: reference.clone(),
                        },
                    )?,
                    Some(target) if !targets.contains(&target.concept_type) => sink.report(
                        ValidationPass::Referential,
                        ConceptGraphError::WrongReferencedConceptFacetValue {
                            concept_type: node.concept_type.clone(),
                            identifier: node.identifier.clone(),
                            facet: facet.name.clone(),
                            reference: reference.clone(),
                            actual_type: target.concept_type.clone(),
                            allowed: targets.iter().cloned().collect(),
                        },
                    )?,
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    fn check_instance_counts(&self, graph: &ConceptGraph, sink: &mut Sink) -> Result<(), Halt> {
        for definition in self.schema.concepts() {
            let name = definition.name.as_str();
            if !definition.instances.contains(graph.count_of_type(name)) {
                sink.report(
                    ValidationPass::Referential,
                    ConceptGraphError::OccurrenceRange {
                        concept_type: definition.name.clone(),
                        expected: definition.instances,
                        actual: graph.nodes_of_type(name).map(|n| n.identifier.clone()).collect(),
                    },
                )?;
            }
        }
        Ok(())
    }
}
