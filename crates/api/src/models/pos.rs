use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse word class used to scope lexical lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Single-letter WordNet code (`n`, `v`, `a`, `r`).
    pub fn code(&self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Map a Penn Treebank tag (`NNS`, `VBD`, ...) to the class the normalizer acts on.
    ///
    /// Only nouns and verbs are rewritten downstream, so everything else maps to `None`.
    pub fn from_treebank_tag(tag: &str) -> Option<Self> {
        match tag.chars().next() {
            Some('N') => Some(PartOfSpeech::Noun),
            Some('V') => Some(PartOfSpeech::Verb),
            _ => None,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PartOfSpeech {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "n" | "noun" => Ok(PartOfSpeech::Noun),
            "v" | "verb" => Ok(PartOfSpeech::Verb),
            "a" | "s" | "adj" | "adjective" => Ok(PartOfSpeech::Adjective),
            "r" | "adv" | "adverb" => Ok(PartOfSpeech::Adverb),
            other => Err(ApiError::UnknownPartOfSpeech(other.to_string())),
        }
    }
}
