mod common;

use common::{dog_died, embedded_normalizer, petit_prince, president};
use deptree_api::SentenceParse;
use deptree_core::{DependencyTree, NodeId, TreeBuilder};

fn shuffled_edges() -> SentenceParse {
    // Edges arrive leaf first, before their governors are known.
    SentenceParse::new("I love New York City")
        .with_edge("nn", "City-5", "New-3")
        .with_edge("nn", "City-5", "York-4")
        .with_edge("dobj", "love-2", "City-5")
        .with_edge("nsubj", "love-2", "I-1")
        .with_edge("root", "ROOT-0", "love-2")
}

fn parses() -> Vec<SentenceParse> {
    vec![dog_died(), petit_prince(), president(), shuffled_edges()]
}

fn assert_is_tree(tree: &DependencyTree) {
    let parentless: Vec<NodeId> = tree
        .topology()
        .node_indices()
        .filter(|&id| tree.parent(id).is_none())
        .collect();
    assert_eq!(parentless, vec![tree.root()]);
    assert_eq!(tree.pre_order().len(), tree.node_count());
    for id in tree.topology().node_indices() {
        assert!(tree.depth(id).is_some(), "node {id:?} is on a cycle");
    }
}

fn token_count(tree: &DependencyTree) -> usize {
    tree.pre_order()
        .into_iter()
        .filter_map(|id| tree.node(id))
        .map(|node| node.tokens().len())
        .sum()
}

#[test]
fn test_built_trees_are_rooted_and_acyclic() {
    for parse in parses() {
        let tree = TreeBuilder::from_parse(&parse).unwrap();
        assert_is_tree(&tree);
        assert_eq!(tree.node(tree.root()).unwrap().head().key(), "ROOT-0");
    }
}

#[test]
fn test_merge_keeps_tree_shape() {
    let mut tree = TreeBuilder::from_parse(&shuffled_edges()).unwrap();
    let city = tree.find("City-5").unwrap();
    let new = tree.find("New-3").unwrap();
    let york = tree.find("York-4").unwrap();

    tree.merge(city, new, true).unwrap();
    tree.merge(city, york, true).unwrap();

    assert_is_tree(&tree);
    let node = tree.node(city).unwrap();
    assert_eq!(node.words(), "New York City");
    assert!(tree.children(city).is_empty());
}

#[test]
fn test_merge_token_accounting() {
    let parse = president();
    let before = token_count(&TreeBuilder::from_parse(&parse).unwrap());

    let mut kept = TreeBuilder::from_parse(&parse).unwrap();
    let states = kept.find("States-8").unwrap();
    let united = kept.find("United-7").unwrap();
    kept.merge(states, united, true).unwrap();
    assert_eq!(token_count(&kept), before);
    assert!(!kept.contains(united));

    let mut dropped = TreeBuilder::from_parse(&parse).unwrap();
    let states = dropped.find("States-8").unwrap();
    let united = dropped.find("United-7").unwrap();
    dropped.merge(states, united, false).unwrap();
    assert_eq!(token_count(&dropped), before - 1);
    assert_eq!(dropped.find("United-7"), None);
}

#[test]
fn test_merged_source_has_no_parent_edge() {
    let mut tree = TreeBuilder::from_parse(&president()).unwrap();
    let president = tree.find("president-4").unwrap();
    let states = tree.find("States-8").unwrap();
    let article = tree.find("the-6").unwrap();

    tree.merge(president, states, true).unwrap();

    for id in tree.pre_order() {
        assert!(!tree.children(id).contains(&states));
    }
    assert_eq!(tree.parent(article), Some(president));
    assert_is_tree(&tree);
}

#[test]
fn test_noun_normalization_is_stable() {
    let normalizer = embedded_normalizer();
    let mut tree = TreeBuilder::from_parse(&president()).unwrap();
    normalizer.normalize(&mut tree);

    let nouns: Vec<(NodeId, String)> = tree
        .pre_order()
        .into_iter()
        .filter(|&id| {
            tree.node(id)
                .and_then(|n| n.head().part_of_speech.as_deref())
                .is_some_and(|tag| tag.starts_with('N'))
        })
        .map(|id| (id, tree.node(id).unwrap().words()))
        .collect();
    assert!(!nouns.is_empty());

    normalizer.normalize(&mut tree);
    for (id, words) in nouns {
        assert_eq!(tree.node(id).unwrap().words(), words);
    }
}

#[test]
fn test_entity_nodes_are_untouched() {
    let normalizer = embedded_normalizer();
    let parse = SentenceParse::new("Paris died")
        .with_edge("root", "ROOT-0", "died-2")
        .with_edge("nsubj", "died-2", "Paris-1")
        .with_word("Paris", "NNS", "LOCATION")
        .with_word("died", "VBD", "O");
    let mut tree = TreeBuilder::from_parse(&parse).unwrap();
    let paris = tree.find("Paris-1").unwrap();
    let before = tree.node(paris).unwrap().tokens().to_vec();

    normalizer.normalize(&mut tree);

    assert_eq!(tree.node(paris).unwrap().tokens(), before.as_slice());
    assert_eq!(tree.node(tree.find("died-2").unwrap()).unwrap().words(), "death");
}
