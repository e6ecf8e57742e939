use crate::data::{LemmaData, LexiconData, SynsetData};
use crate::morphy;
use deptree_api::{ApiError, ApiResult, Lemmatizer, PartOfSpeech, SenseId, SenseInventory};
use std::collections::{HashMap, HashSet};
use std::path::Path;

const EMBEDDED_LEXICON: &str = include_str!("../data/seed.json");

/// Read-only lexical store; safe to share across threads once built.
#[derive(Debug, Clone, Default)]
pub struct LexiconStore {
    index: HashMap<PartOfSpeech, HashSet<String>>,
    exceptions: HashMap<PartOfSpeech, HashMap<String, Vec<String>>>,
    synsets: Vec<SynsetData>,
    synset_ids: HashMap<String, usize>,
    senses_by_lemma: HashMap<(PartOfSpeech, String), Vec<usize>>,
}

impl LexiconStore {
    pub fn from_data(data: LexiconData) -> ApiResult<Self> {
        let mut store = Self::default();

        for (i, synset) in data.synsets.iter().enumerate() {
            if store.synset_ids.insert(synset.id.clone(), i).is_some() {
                return Err(ApiError::MalformedLexicon(format!(
                    "duplicate synset id {}",
                    synset.id
                )));
            }
        }
        store.synsets = data.synsets;

        for (i, synset) in store.synsets.iter().enumerate() {
            for lemma in &synset.lemmas {
                store
                    .senses_by_lemma
                    .entry((synset.pos, lemma.name.clone()))
                    .or_default()
                    .push(i);
                store
                    .index
                    .entry(synset.pos)
                    .or_default()
                    .insert(lemma.name.clone());
            }
        }

        // Targets of derivational pointers are lemmas too, even when their synset is not listed
        let mut targets = Vec::new();
        for synset in &store.synsets {
            for related in synset.lemmas.iter().flat_map(|l| &l.related) {
                match store.pos_of(&related.synset) {
                    Some(pos) => targets.push((pos, related.name.clone())),
                    None => tracing::warn!(
                        "Related form {} points at unknown synset {}",
                        related.name,
                        related.synset
                    ),
                }
            }
        }
        for (pos, name) in targets {
            store.index.entry(pos).or_default().insert(name);
        }

        for (pos, lemmas) in data.lemmas {
            store.index.entry(pos).or_default().extend(lemmas);
        }
        for (pos, table) in data.exceptions {
            store.exceptions.entry(pos).or_default().extend(table);
        }

        tracing::debug!(
            "Loaded lexicon with {} synsets and {} lemmas",
            store.synsets.len(),
            store.lemma_count()
        );
        Ok(store)
    }

    pub fn from_json_str(raw: &str) -> ApiResult<Self> {
        Self::from_data(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> ApiResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// The seed lexicon compiled into the crate.
    pub fn embedded() -> ApiResult<Self> {
        Self::from_json_str(EMBEDDED_LEXICON)
    }

    pub fn lemma_count(&self) -> usize {
        self.index.values().map(|set| set.len()).sum()
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    /// Whether `lemma` is a known base form for `pos`.
    pub fn contains(&self, lemma: &str, pos: PartOfSpeech) -> bool {
        self.index
            .get(&pos)
            .is_some_and(|lemmas| lemmas.contains(lemma))
    }

    pub(crate) fn exception_bases(&self, form: &str, pos: PartOfSpeech) -> Option<&[String]> {
        self.exceptions
            .get(&pos)
            .and_then(|table| table.get(form))
            .map(|bases| bases.as_slice())
    }

    /// Part of speech of a synset: the declared one, else the `p` of a `lemma.p.nn` id.
    pub fn pos_of(&self, synset_id: &str) -> Option<PartOfSpeech> {
        if let Some(&i) = self.synset_ids.get(synset_id) {
            return Some(self.synsets[i].pos);
        }
        let mut parts = synset_id.rsplitn(3, '.');
        let _number = parts.next()?;
        let code = parts.next()?;
        parts.next()?;
        code.parse().ok()
    }

    fn synset(&self, sense: &SenseId) -> Option<&SynsetData> {
        self.synset_ids
            .get(sense.as_str())
            .map(|&i| &self.synsets[i])
    }

    fn lemma(&self, sense: &SenseId, name: &str) -> Option<&LemmaData> {
        self.synset(sense)?.lemmas.iter().find(|l| l.name == name)
    }
}

impl Lemmatizer for LexiconStore {
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        morphy::morphy(self, word, pos)
            .into_iter()
            .min_by_key(|form| form.chars().count())
            .unwrap_or_else(|| word.to_string())
    }
}

impl SenseInventory for LexiconStore {
    fn senses(&self, lemma: &str, pos: PartOfSpeech) -> Vec<SenseId> {
        self.senses_by_lemma
            .get(&(pos, lemma.to_string()))
            .map(|indices| {
                indices
                    .iter()
                    .map(|&i| SenseId::new(self.synsets[i].id.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn lemma_names(&self, sense: &SenseId) -> Vec<String> {
        self.synset(sense)
            .map(|s| s.lemmas.iter().map(|l| l.name.clone()).collect())
            .unwrap_or_default()
    }

    fn derivationally_related(
        &self,
        sense: &SenseId,
        lemma: &str,
        pos: PartOfSpeech,
    ) -> Vec<String> {
        self.lemma(sense, lemma)
            .map(|l| {
                l.related
                    .iter()
                    .filter(|r| self.pos_of(&r.synset) == Some(pos))
                    .map(|r| r.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}
