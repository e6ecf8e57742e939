#![allow(dead_code)]

use deptree_api::SentenceParse;
use deptree_core::{Normalizer, Pipeline};
use deptree_core::{NamedEntityMerge, QuotationMerge};
use deptree_lexicon::LexiconStore;
use std::sync::Arc;

pub fn embedded_normalizer() -> Normalizer {
    let lexicon = Arc::new(LexiconStore::embedded().unwrap());
    Normalizer::new(lexicon.clone(), lexicon)
}

pub fn full_pipeline() -> Pipeline {
    Pipeline::new()
        .with_pass(Box::new(QuotationMerge::new()))
        .with_pass(Box::new(NamedEntityMerge::new()))
        .with_normalizer(embedded_normalizer())
}

/// "The dog died" with the article left out of the dependency edges.
pub fn dog_died() -> SentenceParse {
    SentenceParse::new("The dog died")
        .with_edge("det", "dog-2", "The-1")
        .with_edge("nsubj", "died-3", "dog-2")
        .with_edge("root", "ROOT-0", "died-3")
        .with_word("The", "DT", "O")
        .with_word("dog", "NN", "O")
        .with_word("died", "VBD", "O")
}

/// "Who wrote "Le Petit Prince" in 1943?"
pub fn petit_prince() -> SentenceParse {
    SentenceParse::new("Who wrote \"Le Petit Prince\" in 1943?")
        .with_edge("root", "ROOT-0", "wrote-2")
        .with_edge("nsubj", "wrote-2", "Who-1")
        .with_edge("dobj", "wrote-2", "Prince-6")
        .with_edge("nn", "Prince-6", "Le-4")
        .with_edge("nn", "Prince-6", "Petit-5")
        .with_edge("prep_in", "wrote-2", "1943-9")
        .with_word("Who", "WP", "O")
        .with_word("wrote", "VBD", "O")
        .with_word("``", "``", "O")
        .with_word("Le", "NNP", "O")
        .with_word("Petit", "NNP", "O")
        .with_word("Prince", "NNP", "O")
        .with_word("''", "''", "O")
        .with_word("in", "IN", "O")
        .with_word("1943", "CD", "DATE")
        .with_word("?", ".", "O")
}

/// "Who is the president of the United States?"
pub fn president() -> SentenceParse {
    SentenceParse::new("Who is the president of the United States?")
        .with_edge("root", "ROOT-0", "is-2")
        .with_edge("nsubj", "is-2", "Who-1")
        .with_edge("attr", "is-2", "president-4")
        .with_edge("det", "president-4", "the-3")
        .with_edge("prep_of", "president-4", "States-8")
        .with_edge("det", "States-8", "the-6")
        .with_edge("nn", "States-8", "United-7")
        .with_word("Who", "WP", "O")
        .with_word("is", "VBZ", "O")
        .with_word("the", "DT", "O")
        .with_word("president", "NN", "O")
        .with_word("of", "IN", "O")
        .with_word("the", "DT", "O")
        .with_word("United", "NNP", "LOCATION")
        .with_word("States", "NNPS", "LOCATION")
        .with_word("?", ".", "O")
}
