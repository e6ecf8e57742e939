//! Lexical resources consumed by the morphological normalizer.
//!
//! Implementations are read-only once constructed and may be shared across
//! threads that process different sentences.

use crate::models::PartOfSpeech;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of one word sense (e.g. `die.v.01`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SenseId(pub String);

impl SenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SenseId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Dictionary-based lemmatizer.
pub trait Lemmatizer: Send + Sync {
    /// Reduce `word` to its base form for `pos`. Unknown words come back unchanged.
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String;
}

/// Sense inventory with derivational links between lemmas.
pub trait SenseInventory: Send + Sync {
    /// All senses of `lemma` with the given part of speech, in inventory order.
    fn senses(&self, lemma: &str, pos: PartOfSpeech) -> Vec<SenseId>;

    /// Lemma names grouped under `sense`.
    fn lemma_names(&self, sense: &SenseId) -> Vec<String>;

    /// Derivationally related lemma names of (`sense`, `lemma`), restricted to
    /// senses of `pos`.
    fn derivationally_related(
        &self,
        sense: &SenseId,
        lemma: &str,
        pos: PartOfSpeech,
    ) -> Vec<String>;
}
