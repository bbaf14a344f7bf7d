//! Expectations for a scenario outcome.

use concept_query::ConceptQuery;
use concept_session::SessionError;
use concept_validate::ValidatedGraph;

use crate::error::{ScenarioError, ScenarioResult};

type Check = Box<dyn Fn(&ConceptQuery<'_>) -> Result<(), String>>;

/// What a scenario is expected to produce.
#[derive(Default)]
pub struct Expect {
    // Failure expectations
    error: Option<String>,
    error_pattern: Option<String>,
    violations: Option<usize>,

    // Graph expectations
    checks: Vec<Check>,
}

impl std::fmt::Debug for Expect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Expect")
            .field("error", &self.error)
            .field("error_pattern", &self.error_pattern)
            .field("violations", &self.violations)
            .field("checks", &self.checks.len())
            .finish()
    }
}

impl Expect {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Failure Expectations ====================

    /// Expect the run to fail with a message containing `text`.
    pub fn error(mut self, text: impl Into<String>) -> Self {
        self.error = Some(text.into());
        self
    }

    /// Expect the run to fail with a message matching a regex.
    pub fn error_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.error_pattern = Some(pattern.into());
        self
    }

    /// Expect aggregated validation to report exactly `count` violations.
    pub fn violations(mut self, count: usize) -> Self {
        self.violations = Some(count);
        self
    }

    // ==================== Graph Expectations ====================

    /// Expect the graph to hold `count` concepts of a type.
    pub fn count(self, concept_type: &str, count: usize) -> Self {
        let concept_type = concept_type.to_string();
        self.check(move |query| {
            let actual = query.concepts_of_type(&concept_type).len();
            if actual == count {
                Ok(())
            } else {
                Err(format!("expected {count} {concept_type}, found {actual}"))
            }
        })
    }

    /// Expect the identifiers of a type, in collection order.
    pub fn order(self, concept_type: &str, identifiers: &[&str]) -> Self {
        let concept_type = concept_type.to_string();
        let expected = owned(identifiers);
        self.check(move |query| {
            let actual: Vec<String> = query
                .concepts_of_type(&concept_type)
                .iter()
                .map(|c| c.identifier().to_string())
                .collect();
            compare(&format!("{concept_type} order"), &expected, &actual)
        })
    }

    /// Expect the first text value of a facet.
    pub fn text(self, identifier: &str, facet: &str, value: &str) -> Self {
        let (identifier, facet, value) = (identifier.to_string(), facet.to_string(), value.to_string());
        self.check(move |query| {
            let concept = query
                .concept(&identifier)
                .ok_or_else(|| format!("concept {identifier} not found"))?;
            match concept.text(&facet) {
                Some(actual) if actual == value => Ok(()),
                actual => Err(format!("expected {identifier}.{facet} = {value:?}, found {actual:?}")),
            }
        })
    }

    /// Expect a reference facet to dereference to these identifiers.
    pub fn references(self, identifier: &str, facet: &str, targets: &[&str]) -> Self {
        let (identifier, facet) = (identifier.to_string(), facet.to_string());
        let expected = owned(targets);
        self.check(move |query| {
            let concept = query
                .concept(&identifier)
                .ok_or_else(|| format!("concept {identifier} not found"))?;
            let actual: Vec<String> = concept
                .references(&facet)
                .iter()
                .map(|c| c.identifier().to_string())
                .collect();
            compare(&format!("{identifier}.{facet}"), &expected, &actual)
        })
    }

    /// Expect the resolved parent of a concept.
    pub fn parent(self, identifier: &str, parent: &str) -> Self {
        let (identifier, parent) = (identifier.to_string(), parent.to_string());
        self.check(move |query| {
            let concept = query
                .concept(&identifier)
                .ok_or_else(|| format!("concept {identifier} not found"))?;
            match concept.parent() {
                Some(actual) if actual.identifier() == parent.as_str() => Ok(()),
                actual => Err(format!(
                    "expected parent {parent} for {identifier}, found {:?}",
                    actual.map(|c| c.identifier().to_string())
                )),
            }
        })
    }

    /// Expect the children of a concept, in collection order.
    pub fn children(self, identifier: &str, children: &[&str]) -> Self {
        let identifier = identifier.to_string();
        let expected = owned(children);
        self.check(move |query| {
            let concept = query
                .concept(&identifier)
                .ok_or_else(|| format!("concept {identifier} not found"))?;
            let actual: Vec<String> = concept
                .children()
                .iter()
                .map(|c| c.identifier().to_string())
                .collect();
            compare(&format!("children of {identifier}"), &expected, &actual)
        })
    }

    /// Expect the parentless concepts, in collection order.
    pub fn roots(self, roots: &[&str]) -> Self {
        let expected = owned(roots);
        self.check(move |query| {
            let actual: Vec<String> = query
                .roots()
                .iter()
                .map(|c| c.identifier().to_string())
                .collect();
            compare("roots", &expected, &actual)
        })
    }

    /// Add a custom check on the validated graph.
    pub fn check(mut self, check: impl Fn(&ConceptQuery<'_>) -> Result<(), String> + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    fn expects_failure(&self) -> bool {
        self.error.is_some() || self.error_pattern.is_some() || self.violations.is_some()
    }

    // ==================== Verification ====================

    /// Verify the expectations against a session outcome.
    pub fn verify(&self, scenario: &str, outcome: &Result<ValidatedGraph, SessionError>) -> ScenarioResult<()> {
        let fail = |message: String| ScenarioError::assertion_failed(scenario, message);

        match outcome {
            Err(err) => {
                if !self.expects_failure() {
                    return Err(fail(format!("expected success, got: {err}")));
                }
                self.verify_error(err).map_err(fail)
            }
            Ok(graph) => {
                if self.expects_failure() {
                    return Err(fail("expected failure, but the graph validated".to_string()));
                }
                let query = ConceptQuery::new(graph);
                for check in &self.checks {
                    check(&query).map_err(fail)?;
                }
                Ok(())
            }
        }
    }

    fn verify_error(&self, err: &SessionError) -> Result<(), String> {
        let message = err.to_string();

        if let Some(expected) = &self.error {
            if !message.contains(expected.as_str()) {
                return Err(format!("expected error containing '{expected}', got: {message}"));
            }
        }

        if let Some(pattern) = &self.error_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| format!("invalid regex pattern: {e}"))?;
            if !re.is_match(&message) {
                return Err(format!("expected error matching '{pattern}', got: {message}"));
            }
        }

        if let Some(expected) = self.violations {
            match err {
                SessionError::Validation(violations) if violations.len() == expected => {}
                SessionError::Validation(violations) => {
                    return Err(format!("expected {expected} violations, got {}", violations.len()));
                }
                other => return Err(format!("expected aggregated violations, got: {other}")),
            }
        }

        Ok(())
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn compare(what: &str, expected: &[String], actual: &[String]) -> Result<(), String> {
    if expected == actual {
        Ok(())
    } else {
        Err(format!("{what}: expected {expected:?}, found {actual:?}"))
    }
}
