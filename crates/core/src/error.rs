use deptree_api::ApiError;
use petgraph::stable_graph::NodeIndex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeptreeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] ApiError),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Structural errors raised by tree mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("unknown or removed node {0:?}")]
    UnknownNode(NodeIndex),
    #[error("invalid merge: {0}")]
    InvalidMerge(String),
}

pub type Result<T> = std::result::Result<T, DeptreeError>;
