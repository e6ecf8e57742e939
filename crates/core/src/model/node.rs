use super::token::Token;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::sync::Arc;

/// Named-entity state of a node.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Never touched by the recognizer or an entity merge.
    #[default]
    Undefined,
    /// Explicitly outside any entity.
    Outside,
    Tag(SmolStr),
}

impl EntityKind {
    /// Build from a raw recognizer tag, mapping the `O` sentinel to `Outside`.
    pub fn from_tag(tag: &str) -> Self {
        if tag == deptree_api::OUTSIDE_TAG {
            EntityKind::Outside
        } else {
            EntityKind::Tag(SmolStr::new(tag))
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, EntityKind::Undefined)
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            EntityKind::Tag(tag) => Some(tag.as_str()),
            _ => None,
        }
    }
}

/// A tree vertex: one or more fused words plus their annotations.
#[derive(Debug, Clone)]
pub struct Node {
    tokens: Vec<Token>,
    pub entity: EntityKind,
    /// Relation to the parent; `None` for the root.
    pub dependency: Option<SmolStr>,
    text: Arc<str>,
}

impl Node {
    pub fn new(token: Token) -> Self {
        Self {
            tokens: vec![token],
            entity: EntityKind::Undefined,
            dependency: None,
            text: Arc::from(""),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    /// Token with the lowest index; every live node holds at least one.
    pub fn head(&self) -> &Token {
        &self.tokens[0]
    }

    /// Words of the node joined by single spaces, in sentence order.
    pub fn words(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn sentence_text(&self) -> &str {
        &self.text
    }

    pub(crate) fn set_sentence_text(&mut self, text: Arc<str>) {
        self.text = text;
    }

    pub(crate) fn absorb_tokens(&mut self, tokens: Vec<Token>) {
        self.tokens.extend(tokens);
        self.sort_tokens();
    }

    pub(crate) fn take_tokens(&mut self) -> Vec<Token> {
        std::mem::take(&mut self.tokens)
    }

    /// Stable sort by sentence index.
    pub fn sort_tokens(&mut self) {
        self.tokens.sort_by_key(|t| t.index());
    }
}
