//! Parser output consumed by the tree builder.
//!
//! The shapes mirror the JSON produced by the statistical dependency parser:
//! one `SentenceParse` per sentence, wrapped in a `ParseDocument`.

use serde::{Deserialize, Serialize};

/// Named-entity tag the parser emits for tokens outside any entity.
pub const OUTSIDE_TAG: &str = "O";

/// Surface key of the artificial root every edge list must reference.
pub const ROOT_KEY: &str = "ROOT-0";

/// `[label, parentKey, childKey]` where keys are `word-index` strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IndexedDependency(pub String, pub String, pub String);

impl IndexedDependency {
    pub fn new(
        label: impl Into<String>,
        governor: impl Into<String>,
        dependent: impl Into<String>,
    ) -> Self {
        Self(label.into(), governor.into(), dependent.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    pub fn governor(&self) -> &str {
        &self.1
    }

    pub fn dependent(&self) -> &str {
        &self.2
    }
}

/// Per-word annotations; the parser emits more fields than the ones kept here.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WordAnnotation {
    #[serde(rename = "PartOfSpeech", default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(rename = "NamedEntityTag", default, skip_serializing_if = "Option::is_none")]
    pub named_entity_tag: Option<String>,
}

impl WordAnnotation {
    pub fn new(part_of_speech: &str, named_entity_tag: &str) -> Self {
        Self {
            part_of_speech: Some(part_of_speech.to_string()),
            named_entity_tag: Some(named_entity_tag.to_string()),
        }
    }

    /// Concrete entity tag, `None` for the `O` sentinel or a missing tag.
    pub fn entity_tag(&self) -> Option<&str> {
        self.named_entity_tag
            .as_deref()
            .filter(|tag| *tag != OUTSIDE_TAG)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceParse {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub indexeddependencies: Vec<IndexedDependency>,
    #[serde(default)]
    pub words: Vec<(String, WordAnnotation)>,
}

impl SentenceParse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_edge(
        mut self,
        label: impl Into<String>,
        governor: impl Into<String>,
        dependent: impl Into<String>,
    ) -> Self {
        self.indexeddependencies
            .push(IndexedDependency::new(label, governor, dependent));
        self
    }

    pub fn with_word(mut self, surface: impl Into<String>, pos: &str, ner: &str) -> Self {
        self.words
            .push((surface.into(), WordAnnotation::new(pos, ner)));
        self
    }
}

/// Whole-document parser output.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseDocument {
    #[serde(default)]
    pub sentences: Vec<SentenceParse>,
}
