use crate::error::{DeptreeError, Result};
use serde::{Deserialize, Serialize};

/// One surface word at a fixed position in the sentence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Text of the word; rewritten in place by normalization.
    pub word: String,
    index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
}

impl Token {
    pub fn new(word: impl Into<String>, index: u32) -> Self {
        Self {
            word: word.into(),
            index,
            part_of_speech: None,
        }
    }

    /// Parse a `word-index` key, splitting at the last `-` so hyphenated words survive.
    pub fn from_key(key: &str) -> Result<Self> {
        let (word, index) = key
            .rsplit_once('-')
            .ok_or_else(|| DeptreeError::MalformedInput(format!("key without index: {key:?}")))?;
        let index = index.parse::<u32>().map_err(|_| {
            DeptreeError::MalformedInput(format!("key with non-numeric index: {key:?}"))
        })?;
        Ok(Self::new(word, index))
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// `word-index` key built from the current word.
    ///
    /// Matches the parser key until normalization rewrites `word`; lookups by
    /// parser key go through the tree's key index instead.
    pub fn key(&self) -> String {
        format!("{}-{}", self.word, self.index)
    }
}
