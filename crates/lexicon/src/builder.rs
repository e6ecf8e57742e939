use crate::data::{LemmaData, LexiconData, RelatedForm, SynsetData};
use crate::store::LexiconStore;
use deptree_api::{ApiError, ApiResult, PartOfSpeech};

/// Programmatic construction of a [`LexiconStore`].
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    data: LexiconData,
    dangling: Vec<String>,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lemma(mut self, pos: PartOfSpeech, name: &str) -> Self {
        self.data
            .lemmas
            .entry(pos)
            .or_default()
            .push(name.to_string());
        self
    }

    pub fn exception(mut self, pos: PartOfSpeech, form: &str, base: &str) -> Self {
        self.data
            .exceptions
            .entry(pos)
            .or_default()
            .entry(form.to_string())
            .or_default()
            .push(base.to_string());
        self
    }

    pub fn synset(mut self, id: &str, pos: PartOfSpeech, lemmas: &[&str]) -> Self {
        self.data.synsets.push(SynsetData {
            id: id.to_string(),
            pos,
            lemmas: lemmas
                .iter()
                .map(|name| LemmaData {
                    name: name.to_string(),
                    related: Vec::new(),
                })
                .collect(),
        });
        self
    }

    /// Link lemma `lemma` of `synset` to lemma `target_name` of `target_synset`.
    pub fn related(
        mut self,
        synset: &str,
        lemma: &str,
        target_synset: &str,
        target_name: &str,
    ) -> Self {
        let slot = self
            .data
            .synsets
            .iter_mut()
            .find(|s| s.id == synset)
            .and_then(|s| s.lemmas.iter_mut().find(|l| l.name == lemma));
        match slot {
            Some(lemma_data) => lemma_data.related.push(RelatedForm {
                synset: target_synset.to_string(),
                name: target_name.to_string(),
            }),
            None => self.dangling.push(format!("{synset}/{lemma}")),
        }
        self
    }

    pub fn build(self) -> ApiResult<LexiconStore> {
        if let Some(first) = self.dangling.first() {
            return Err(ApiError::NotFound(format!(
                "related form declared on unknown lemma {first}"
            )));
        }
        LexiconStore::from_data(self.data)
    }
}
