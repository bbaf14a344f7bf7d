//! Schema construction.

use concept_schema::{FacetKind, Occurrence};
use concept_tests::prelude::*;
use concept_tests::ScenarioError;
use pretty_assertions::assert_eq;

fn library_by_builder() -> SchemaModel {
    let mut builder = SchemaBuilder::new();
    builder
        .concept("Library")
        .text("Title", 1, Some(1))
        .instances(1, Some(1))
        .done();
    builder.concept("Author").text("Name", 1, Some(1)).done();
    builder
        .concept("Book")
        .text("Title", 1, Some(1))
        .enumeration("Genre", ["Fiction", "History", "Science"], 0, Some(1))
        .reference("Author", ["Author"], 1, None)
        .reference("Sequel", ["Book"], 0, Some(1))
        .done();
    builder.build().unwrap()
}

// ========== TEST: json_matches_builder ==========
#[test]
fn test_json_matches_builder() {
    // GIVEN the same schema written as JSON and with the builder
    let from_json = load_schema("library/schema.json").unwrap();
    let from_builder = library_by_builder();

    // THEN both produce the same definitions in the same order
    assert_eq!(
        from_json.concepts().cloned().collect::<Vec<_>>(),
        from_builder.concepts().cloned().collect::<Vec<_>>()
    );
    assert_eq!(from_json.to_descriptor(), from_builder.to_descriptor());
}

// ========== TEST: descriptor_defaults ==========
#[test]
fn test_descriptor_defaults() {
    let schema = load_schema("library/schema.json").unwrap();

    let library = schema.concept("Library").unwrap();
    assert_eq!(library.instances, Occurrence::REQUIRED);
    assert_eq!(schema.concept("Author").unwrap().instances, Occurrence::ANY);

    let genre = schema.facet("Book", "Genre").unwrap();
    assert_eq!(genre.occurrence, Occurrence::OPTIONAL);
    assert_eq!(genre.kind.to_string(), "Enumeration[Fiction, History, Science]");

    let author = schema.facet("Book", "Author").unwrap();
    assert_eq!(author.occurrence, Occurrence::at_least(1));
    assert!(matches!(author.kind, FacetKind::Reference(_)));
}

// ========== TEST: schema_errors_name_the_offender ==========
#[test]
fn test_duplicate_concept_in_json() {
    let err = load_schema("catalog/schema.json").unwrap_err();

    match err {
        ScenarioError::Schema { message, .. } => {
            assert_eq!(message, "Duplicate concept definition: Catalog");
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_unknown_reference_target_in_json() {
    let err = load_schema("catalog/unknown-target.json").unwrap_err();

    assert!(err
        .to_string()
        .ends_with("Unknown referenced concept type: Curator in facet Owner of concept Catalog"));
}

#[test]
fn test_malformed_descriptor() {
    let json = std::fs::read_to_string(fixture_path("catalog/malformed.json")).unwrap();

    let err = SchemaModel::from_json(&json).unwrap_err();

    assert!(matches!(err, SchemaError::Descriptor(_)));
}

#[test]
fn test_builder_errors_name_concept_and_facet() {
    let mut builder = SchemaBuilder::new();
    builder.concept("Shelf").text("Label", 2, Some(1)).done();

    let err = builder.build().unwrap_err();

    assert_eq!(err.concept(), Some("Shelf"));
    assert_eq!(err.facet(), Some("Label"));
    assert_eq!(err.to_string(), "Invalid occurrence range 2..1 on facet Label of concept Shelf");
}

#[test]
fn test_duplicate_facet() {
    let mut builder = SchemaBuilder::new();
    builder
        .concept("Shelf")
        .text("Label", 0, Some(1))
        .enumeration("Label", ["A"], 0, Some(1))
        .done();

    let err = builder.build().unwrap_err();

    assert!(matches!(
        err,
        SchemaError::DuplicateFacetDefinition { ref concept, ref facet } if concept == "Shelf" && facet == "Label"
    ));
}
