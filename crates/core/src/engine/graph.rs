//! Arena-backed dependency tree
//!
//! Edges point from parent to child and carry the order in which the child was
//! attached. A finished tree never allocates nodes, so the index of a merged-away
//! node is not reused and stale handles fail lookups instead of aliasing.

use crate::model::Node;
use indexmap::IndexMap;
use petgraph::Direction;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use std::sync::Arc;

pub type NodeId = NodeIndex;

/// Parent → child link; `seq` orders siblings by attachment time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildLink {
    pub seq: u64,
}

/// Internal data shared by the builder and the finished tree
#[derive(Debug, Clone, Default)]
pub(crate) struct TreeInner {
    pub topology: StableDiGraph<Node, ChildLink>,

    /// Surface key (`word-index`) -> node currently holding that token
    pub key_index: IndexMap<String, NodeId>,

    pub next_seq: u64,
}

impl TreeInner {
    pub fn add_node(&mut self, key: String, node: Node) -> NodeId {
        let idx = self.topology.add_node(node);
        self.key_index.insert(key, idx);
        idx
    }

    /// Make `child` the last child of `parent`, dropping any previous parent link.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.topology.add_edge(parent, child, ChildLink { seq });
    }

    /// Remove the link to `child`'s parent. Parentless nodes are left alone.
    pub fn detach(&mut self, child: NodeId) {
        let incoming: Vec<EdgeIndex> = self
            .topology
            .edges_directed(child, Direction::Incoming)
            .map(|e| e.id())
            .collect();
        for edge in incoming {
            self.topology.remove_edge(edge);
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.topology
            .edges_directed(id, Direction::Incoming)
            .next()
            .map(|e| e.source())
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut links: Vec<(u64, NodeId)> = self
            .topology
            .edges_directed(id, Direction::Outgoing)
            .map(|e| (e.weight().seq, e.target()))
            .collect();
        links.sort_by_key(|(seq, _)| *seq);
        links.into_iter().map(|(_, child)| child).collect()
    }

    /// Assign the sentence text to every node reachable from `root`.
    pub fn propagate_text(&mut self, root: NodeId, text: &Arc<str>) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.topology.node_weight_mut(id) {
                node.set_sentence_text(text.clone());
            }
            stack.extend(self.children(id));
        }
    }
}

/// Rooted dependency tree produced by [`crate::engine::TreeBuilder`].
#[derive(Debug, Clone)]
pub struct DependencyTree {
    pub(crate) inner: TreeInner,
    root: NodeId,
    text: Arc<str>,
}

impl DependencyTree {
    pub(crate) fn from_inner(inner: TreeInner, root: NodeId, text: Arc<str>) -> Self {
        Self { inner, root, text }
    }

    // ---- Read-only accessors ----

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Sentence text as reported by the parser, unescaped.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn topology(&self) -> &StableDiGraph<Node, ChildLink> {
        &self.inner.topology
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.inner.topology.node_weight(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.inner.topology.node_weight_mut(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.inner.topology.contains_node(id)
    }

    /// Live node count, including nodes the root cannot reach.
    pub fn node_count(&self) -> usize {
        self.inner.topology.node_count()
    }

    /// Find the node currently holding the token keyed `word-index`.
    pub fn find(&self, key: &str) -> Option<NodeId> {
        self.inner.key_index.get(key).copied()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.inner.parent(id)
    }

    /// Children in attachment order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.inner.children(id)
    }

    /// Distance from the root, `None` if `id` is not reachable from it.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut depth = 0;
        let mut current = id;
        for _ in 0..=self.node_count() {
            if current == self.root {
                return Some(depth);
            }
            current = self.parent(current)?;
            depth += 1;
        }
        None
    }

    /// True if `ancestor` lies strictly above `id` on its parent chain.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = id;
        // Bounded walk: detached components may contain parent cycles
        for _ in 0..=self.node_count() {
            match self.parent(current) {
                Some(parent) if parent == ancestor => return true,
                Some(parent) => current = parent,
                None => return false,
            }
        }
        false
    }

    /// Nodes reachable from the root, parents before children.
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).into_iter().rev());
        }
        order
    }

    /// Nodes reachable from the root, every child before its parent.
    pub fn post_order(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![(self.root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            stack.push((id, true));
            for child in self.children(id).into_iter().rev() {
                stack.push((child, false));
            }
        }
        order
    }
}
