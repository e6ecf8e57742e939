//! Morphological normalization of a finished tree.
//!
//! Nodes are visited children-first. Nouns are lemmatized; verbs are lemmatized
//! and then turned into their closest noun. Nodes carrying any entity state
//! (a tag, or an explicit "outside") keep their surface text.

pub mod derive;
#[cfg(test)]
pub(crate) mod testing;

pub use derive::{Candidate, NounDeriver};

use crate::engine::DependencyTree;
use crate::model::Token;
use deptree_api::{Lemmatizer, PartOfSpeech, SenseInventory};
use std::sync::Arc;

#[derive(Clone)]
pub struct Normalizer {
    lemmatizer: Arc<dyn Lemmatizer>,
    deriver: NounDeriver,
}

impl Normalizer {
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>, inventory: Arc<dyn SenseInventory>) -> Self {
        Self {
            lemmatizer,
            deriver: NounDeriver::new(inventory),
        }
    }

    pub fn deriver(&self) -> &NounDeriver {
        &self.deriver
    }

    /// Rewrite every eligible node of `tree` in place.
    pub fn normalize(&self, tree: &mut DependencyTree) {
        let mut rewritten = 0;
        for id in tree.post_order() {
            let Some(node) = tree.node_mut(id) else {
                continue;
            };
            if !node.entity.is_undefined() {
                continue;
            }
            for token in node.tokens_mut() {
                if self.normalize_token(token) {
                    rewritten += 1;
                }
            }
        }
        tracing::debug!("Normalized {} tokens", rewritten);
    }

    /// Normalize one token; returns whether its text changed.
    pub fn normalize_token(&self, token: &mut Token) -> bool {
        let pos = token
            .part_of_speech
            .as_deref()
            .and_then(PartOfSpeech::from_treebank_tag);
        let normalized = match pos {
            Some(PartOfSpeech::Noun) => self.lemmatizer.lemmatize(&token.word, PartOfSpeech::Noun),
            Some(PartOfSpeech::Verb) => {
                let lemma = self.lemmatizer.lemmatize(&token.word, PartOfSpeech::Verb);
                self.deriver.nounify(&lemma)
            }
            _ => return false,
        };
        if normalized == token.word {
            return false;
        }
        token.word = normalized;
        true
    }
}
