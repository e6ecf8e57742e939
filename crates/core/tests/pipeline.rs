mod common;

use common::{dog_died, full_pipeline, petit_prince, president};
use deptree_api::{ParseDocument, PartOfSpeech, SentenceParse};
use deptree_core::serialize::to_dot;
use deptree_core::{DeptreeError, EntityKind, Normalizer, Pipeline, Token};
use deptree_lexicon::LexiconBuilder;
use std::sync::Arc;

#[test]
fn test_dog_died_end_to_end() {
    let tree = full_pipeline().process(&dog_died()).unwrap();

    let root = tree.root();
    let children = tree.children(root);
    assert_eq!(children.len(), 1);
    let died = children[0];
    assert_eq!(tree.node(died).unwrap().words(), "death");

    let dog = tree.children(died)[0];
    let dog_node = tree.node(dog).unwrap();
    assert_eq!(dog_node.words(), "dog");
    assert_eq!(dog_node.dependency.as_deref(), Some("nsubj"));

    let expected = "digraph relations {\n\
        \t\"ROOT0\"[label=\"ROOT\",shape=box];\n\
        \t\"ROOT0\" -> \"death3\"[label=\"root\"];\n\
        \t\"death3\"[label=\"death\",shape=box];\n\
        \t\"death3\" -> \"dog2\"[label=\"nsubj\"];\n\
        \t\"dog2\"[label=\"dog\",shape=box];\n\
        \t\"dog2\" -> \"The1\"[label=\"det\"];\n\
        \t\"The1\"[label=\"The\",shape=box];\n\
        \tlabelloc=\"t\"\tlabel=\"The dog died\";\n}";
    assert_eq!(to_dot(&tree), expected);
}

#[test]
fn test_quoted_title_survives_normalization() {
    let tree = full_pipeline().process(&petit_prince()).unwrap();

    let wrote = tree.find("wrote-2").unwrap();
    assert_eq!(tree.node(wrote).unwrap().words(), "writer");

    let title = tree.find("Petit-5").unwrap();
    let node = tree.node(title).unwrap();
    assert_eq!(node.words(), "Le Petit Prince");
    assert_eq!(node.entity.tag(), Some("QUOTATION"));
    assert_eq!(node.dependency.as_deref(), Some("dobj"));

    let date = tree.node(tree.find("1943-9").unwrap()).unwrap();
    assert_eq!(date.words(), "1943");
    assert_eq!(date.entity.tag(), Some("DATE"));

    let dot = to_dot(&tree);
    assert!(dot.contains("\t\"Le4\"[label=\"Le Petit Prince [QUOTATION]\",shape=box];\n"));
    assert!(dot.contains("label=\"Who wrote \\\"Le Petit Prince\\\" in 1943?\";\n}"));
}

#[test]
fn test_named_entity_and_copula() {
    let tree = full_pipeline().process(&president()).unwrap();

    let copula = tree.node(tree.find("is-2").unwrap()).unwrap();
    assert_eq!(copula.words(), "identity");

    let states = tree.find("States-8").unwrap();
    assert_eq!(tree.find("United-7"), Some(states));
    let node = tree.node(states).unwrap();
    assert_eq!(node.words(), "United States");
    assert_eq!(node.entity.tag(), Some("LOCATION"));

    let president = tree.node(tree.find("president-4").unwrap()).unwrap();
    assert_eq!(president.words(), "president");
    assert!(to_dot(&tree).contains("\"United7\"[label=\"United States [LOCATION]\",shape=box];"));
}

#[test]
fn test_be_ignores_inventory() {
    let lexicon = Arc::new(
        LexiconBuilder::new()
            .synset("be.v.01", PartOfSpeech::Verb, &["be"])
            .related("be.v.01", "be", "being.n.01", "being")
            .synset("be.v.02", PartOfSpeech::Verb, &["be"])
            .related("be.v.02", "be", "being.n.01", "being")
            .exception(PartOfSpeech::Verb, "was", "be")
            .build()
            .unwrap(),
    );
    let normalizer = Normalizer::new(lexicon.clone(), lexicon);

    for word in ["be", "was"] {
        let mut token = Token::new(word, 1);
        token.part_of_speech = Some("VBD".to_string());
        normalizer.normalize_token(&mut token);
        assert_eq!(token.word, "identity");
    }
}

#[test]
fn test_person_tagged_verb_keeps_surface_text() {
    let parse = SentenceParse::new("Will died")
        .with_edge("root", "ROOT-0", "died-2")
        .with_edge("nsubj", "died-2", "Will-1")
        .with_word("Will", "VB", "PERSON")
        .with_word("died", "VBD", "O");
    let tree = full_pipeline().process(&parse).unwrap();

    let will = tree.node(tree.find("Will-1").unwrap()).unwrap();
    assert_eq!(will.words(), "Will");
    assert_eq!(will.entity, EntityKind::from_tag("PERSON"));
}

#[test]
fn test_unknown_verb_is_kept() {
    let parse = SentenceParse::new("It frobnicated")
        .with_edge("root", "ROOT-0", "frobnicated-2")
        .with_edge("nsubj", "frobnicated-2", "It-1")
        .with_word("It", "PRP", "O")
        .with_word("frobnicated", "VBD", "O");
    let tree = full_pipeline().process(&parse).unwrap();

    let verb = tree.node(tree.find("frobnicated-2").unwrap()).unwrap();
    assert_eq!(verb.words(), "frobnicated");
}

#[test]
fn test_document_isolates_failures() {
    let document = ParseDocument {
        sentences: vec![
            dog_died(),
            SentenceParse::new("broken").with_edge("dep", "a-1", "b-2"),
            president(),
        ],
    };
    let results = full_pipeline().process_document(&document);

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(DeptreeError::MalformedInput(_))));
    assert!(results[2].is_ok());
}

#[test]
fn test_pipeline_without_stages_only_builds() {
    let tree = Pipeline::new().process(&president()).unwrap();

    assert_eq!(tree.node(tree.find("is-2").unwrap()).unwrap().words(), "is");
    assert_ne!(tree.find("United-7"), tree.find("States-8"));
}
