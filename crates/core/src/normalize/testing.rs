//! In-memory lexical resources for unit tests.

use deptree_api::{Lemmatizer, PartOfSpeech, SenseId, SenseInventory};
use std::collections::HashMap;

struct MockSense {
    id: SenseId,
    verb: String,
    lemmas: Vec<String>,
    related_nouns: Vec<String>,
}

#[derive(Default)]
pub(crate) struct MockLexicon {
    lemmas: HashMap<(String, PartOfSpeech), String>,
    senses: Vec<MockSense>,
}

impl MockLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lemma(mut self, word: &str, pos: PartOfSpeech, lemma: &str) -> Self {
        self.lemmas
            .insert((word.to_string(), pos), lemma.to_string());
        self
    }

    /// Verb sense of `verb`; every lemma in `lemmas` relates to all of `related_nouns`.
    pub fn sense(mut self, id: &str, verb: &str, lemmas: &[&str], related_nouns: &[&str]) -> Self {
        self.senses.push(MockSense {
            id: SenseId::new(id),
            verb: verb.to_string(),
            lemmas: lemmas.iter().map(|s| s.to_string()).collect(),
            related_nouns: related_nouns.iter().map(|s| s.to_string()).collect(),
        });
        self
    }
}

impl Lemmatizer for MockLexicon {
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        self.lemmas
            .get(&(word.to_string(), pos))
            .cloned()
            .unwrap_or_else(|| word.to_string())
    }
}

impl SenseInventory for MockLexicon {
    fn senses(&self, lemma: &str, pos: PartOfSpeech) -> Vec<SenseId> {
        if pos != PartOfSpeech::Verb {
            return Vec::new();
        }
        self.senses
            .iter()
            .filter(|s| s.verb == lemma)
            .map(|s| s.id.clone())
            .collect()
    }

    fn lemma_names(&self, sense: &SenseId) -> Vec<String> {
        self.senses
            .iter()
            .find(|s| &s.id == sense)
            .map(|s| s.lemmas.clone())
            .unwrap_or_default()
    }

    fn derivationally_related(
        &self,
        sense: &SenseId,
        lemma: &str,
        pos: PartOfSpeech,
    ) -> Vec<String> {
        if pos != PartOfSpeech::Noun {
            return Vec::new();
        }
        self.senses
            .iter()
            .find(|s| &s.id == sense && s.lemmas.iter().any(|l| l == lemma))
            .map(|s| s.related_nouns.clone())
            .unwrap_or_default()
    }
}
