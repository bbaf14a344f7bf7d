//! Library scenarios: one valid dataset and one dataset per kind of defect.

use concept_tests::prelude::*;

const SCHEMA: &str = "library/schema.json";

fn library(name: &str, dataset: &str) -> Scenario {
    Scenario::new(name).schema(SCHEMA).dataset(dataset)
}

mod valid {
    use super::*;

    pub fn scenario() -> Scenario {
        library("valid", "library/valid.json").expect(|e| {
            e.count("Library", 1)
                .count("Book", 2)
                .count("Author", 2)
                .text("B1", "Title", "Dune")
                .text("B1", "Genre", "Fiction")
                // Forward references resolve
                .references("B1", "Sequel", &["B2"])
                .references("B1", "Author", &["A1"])
                .references("B2", "Author", &["A1", "A2"])
                .references("B2", "Sequel", &[])
                .parent("A2", "L1")
                .roots(&["L1"])
                .children("L1", &["B1", "A1", "B2", "A2"])
                .order("Book", &["B1", "B2"])
        })
    }

    #[test]
    fn test_valid_library() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_dereferenced_values_are_typed() {
        let schema = load_schema(SCHEMA).unwrap();
        let mut collector = ConceptDataCollector::new();
        DatasetSource::load("library/valid.json")
            .unwrap()
            .collect(&mut collector)
            .unwrap();
        let graph = GraphBuilder::new(&schema).build_from(collector).unwrap();
        let graph = Validator::new(&schema).validate(graph).unwrap();
        let query = ConceptQuery::new(&graph);

        let b1 = query.concept("B1").unwrap();
        let author = match b1.facet("Author").as_slice() {
            [FacetItem::Concept(author)] => *author,
            other => panic!("expected one dereferenced author, got {other:?}"),
        };
        assert_eq!(author.concept_type().as_str(), "Author");
        assert_eq!(author.text("Name"), Some("Frank Herbert"));
        assert_eq!(author.parent().map(|p| p.identifier().to_string()), Some("L1".to_string()));
    }
}

mod cardinality {
    use super::*;

    #[test]
    fn test_missing_required_facet() {
        library("missing_title", "library/missing-title.json")
            .expect(|e| e.error("Wrong cardinality for facet Title on concept B1: expected 1..1, found 0"))
            .run()
            .unwrap();
    }

    #[test]
    fn test_too_few_instances() {
        library("no_library", "library/no-library.json")
            .expect(|e| e.error("Concept type Library expects 1..1 instances, found 0 []"))
            .run()
            .unwrap();
    }

    #[test]
    fn test_too_many_instances() {
        library("two_libraries", "library/two-libraries.json")
            .expect(|e| e.error("Concept type Library expects 1..1 instances, found 2 [L1, L2]"))
            .run()
            .unwrap();
    }
}

mod value_kinds {
    use super::*;

    #[test]
    fn test_enumeration_member_outside_set() {
        library("bad_genre", "library/bad-genre.json")
            .expect(|e| e.error("Wrong type for facet Genre on concept B1: \"Poetry\" is not Enumeration[Fiction, History, Science]"))
            .run()
            .unwrap();
    }

    #[test]
    fn test_literal_in_reference_facet() {
        library("literal_reference", "library/literal-reference.json")
            .expect(|e| e.error("Wrong type for facet Author on concept B1: \"A1\" is not Reference[Author]"))
            .run()
            .unwrap();
    }
}

mod unknown_names {
    use super::*;

    #[test]
    fn test_unknown_concept_type() {
        library("unknown_type", "library/unknown-type.json")
            .expect(|e| e.error("Unknown concept type Magazine for concept M1"))
            .run()
            .unwrap();
    }

    #[test]
    fn test_unknown_facet() {
        library("unknown_facet", "library/unknown-facet.json")
            .expect(|e| e.error("Unknown facet Isbn on concept L1 of type Library"))
            .run()
            .unwrap();
    }
}

mod references {
    use super::*;

    #[test]
    fn test_dangling_reference() {
        library("dangling", "library/dangling-reference.json")
            .expect(|e| e.error("Concept A9 referenced by facet Author of concept B1 not found"))
            .run()
            .unwrap();
    }

    #[test]
    fn test_reference_to_disallowed_type() {
        library("wrong_target", "library/wrong-target.json")
            .expect(|e| {
                e.error("Concept B1 referenced by facet Author of concept B2 has type Book, expected one of [Author]")
            })
            .run()
            .unwrap();
    }

    #[test]
    fn test_unresolved_parent() {
        library("orphan", "library/orphan.json")
            .expect(|e| e.error("Parent concept L9 of concept A1 not found"))
            .run()
            .unwrap();
    }

    #[test]
    fn test_identifiers_are_unique_across_types() {
        library("duplicate", "library/duplicate-identifier.json")
            .expect(|e| e.error("Duplicate concept identifier found: X1 (concept type Book)"))
            .run()
            .unwrap();
    }
}
