use crate::engine::{DependencyTree, NodeId};
use crate::model::{EntityKind, Token};
use serde::{Deserialize, Serialize};

/// Owned, recursive view of a tree suitable for JSON output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TreeSnapshot {
    pub words: String,
    pub tokens: Vec<Token>,
    pub entity: EntityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSnapshot>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SentenceSnapshot {
    pub text: String,
    pub root: TreeSnapshot,
}

impl TreeSnapshot {
    pub fn capture(tree: &DependencyTree, id: NodeId) -> Option<Self> {
        let node = tree.node(id)?;
        Some(Self {
            words: node.words(),
            tokens: node.tokens().to_vec(),
            entity: node.entity.clone(),
            dependency: node.dependency.as_ref().map(|d| d.to_string()),
            children: tree
                .children(id)
                .into_iter()
                .filter_map(|child| Self::capture(tree, child))
                .collect(),
        })
    }
}

impl SentenceSnapshot {
    pub fn capture(tree: &DependencyTree) -> Option<Self> {
        Some(Self {
            text: tree.text().to_string(),
            root: TreeSnapshot::capture(tree, tree.root())?,
        })
    }
}

pub fn to_json(tree: &DependencyTree) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(SentenceSnapshot::capture(tree))
}
