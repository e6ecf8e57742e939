use deptree_api::PartOfSpeech;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// On-disk lexicon layout.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LexiconData {
    /// Extra lemma forms per part of speech, beyond those named by synsets.
    pub lemmas: IndexMap<PartOfSpeech, Vec<String>>,
    /// Irregular inflections: inflected form -> base forms.
    pub exceptions: IndexMap<PartOfSpeech, IndexMap<String, Vec<String>>>,
    pub synsets: Vec<SynsetData>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SynsetData {
    /// `lemma.p.nn` style identifier.
    pub id: String,
    pub pos: PartOfSpeech,
    pub lemmas: Vec<LemmaData>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LemmaData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedForm>,
}

/// Derivational pointer to a lemma of another synset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RelatedForm {
    pub synset: String,
    pub name: String,
}
