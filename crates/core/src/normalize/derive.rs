//! Verb → noun derivation
//!
//! High-frequency verbs whose derivational neighbours are ambiguous or
//! misleading go through a fixed table. Everything else is ranked by how often
//! each noun shows up among the derivationally related forms of all the verb's
//! senses.

use deptree_api::{PartOfSpeech, SenseInventory};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

static NOUNIFY_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("be", "identity"),
        ("have", "possession"),
        ("do", "process"),
        ("bear", "birth"),
        ("live", "residence"),
        ("direct", "director"),
    ])
});

/// Fixed derivation for `verb`, if it is one of the hard-coded exceptions.
pub fn exception(verb: &str) -> Option<&'static str> {
    NOUNIFY_EXCEPTIONS.get(verb).copied()
}

/// A candidate noun and its share of all related forms.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub noun: String,
    pub count: usize,
    pub weight: f64,
}

#[derive(Clone)]
pub struct NounDeriver {
    inventory: Arc<dyn SenseInventory>,
}

impl NounDeriver {
    pub fn new(inventory: Arc<dyn SenseInventory>) -> Self {
        Self { inventory }
    }

    /// Closest noun for a verb lemma (`die` → `death`), or the verb itself
    /// when nothing can be derived.
    pub fn nounify(&self, verb: &str) -> String {
        if let Some(noun) = exception(verb) {
            return noun.to_string();
        }
        match self.candidates(verb).into_iter().next() {
            Some(best) => best.noun,
            None => {
                tracing::trace!("No derivation for {:?}, keeping verb", verb);
                verb.to_string()
            }
        }
    }

    /// Ranked candidates: highest weight first, ties broken lexicographically.
    ///
    /// Exceptions are not consulted here.
    pub fn candidates(&self, verb: &str) -> Vec<Candidate> {
        let senses = self.inventory.senses(verb, PartOfSpeech::Verb);
        if senses.is_empty() {
            return Vec::new();
        }

        let mut related = Vec::new();
        for sense in &senses {
            for lemma in self.inventory.lemma_names(sense) {
                related.extend(self.inventory.derivationally_related(
                    sense,
                    &lemma,
                    PartOfSpeech::Noun,
                ));
            }
        }
        if related.is_empty() {
            return Vec::new();
        }

        let total = related.len();
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for noun in related {
            *counts.entry(noun).or_default() += 1;
        }

        let mut candidates: Vec<Candidate> = counts
            .into_iter()
            .map(|(noun, count)| Candidate {
                weight: count as f64 / total as f64,
                noun,
                count,
            })
            .collect();
        candidates.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.noun.cmp(&b.noun)));
        candidates
    }
}
