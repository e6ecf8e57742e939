//! Tree builder for parser output
//!
//! The `TreeBuilder` creates nodes lazily, the first time a surface key shows up
//! on either side of an edge, then back-fills part-of-speech and entity tags
//! from the per-word annotations. `build()` freezes the result into a
//! `DependencyTree` rooted at `ROOT-0`.

use super::graph::{DependencyTree, NodeId, TreeInner};
use crate::error::{DeptreeError, Result};
use crate::model::{EntityKind, Node, Token};
use deptree_api::{IndexedDependency, ROOT_KEY, SentenceParse, WordAnnotation};
use smol_str::SmolStr;
use std::sync::Arc;

/// Mutable tree builder
pub struct TreeBuilder {
    inner: TreeInner,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            inner: TreeInner::default(),
        }
    }

    /// Run the edge pass, the tag pass and root lookup over one sentence.
    pub fn from_parse(parse: &SentenceParse) -> Result<DependencyTree> {
        let mut builder = Self::new();
        builder.add_edges(&parse.indexeddependencies)?;
        builder.apply_tags(&parse.words);
        builder.build(&parse.text)
    }

    // ---- Mutation methods ----

    /// Resolve `key` to its node, creating a single-token node on first sight.
    pub fn get_or_create(&mut self, key: &str) -> Result<NodeId> {
        if let Some(&idx) = self.inner.key_index.get(key) {
            return Ok(idx);
        }
        let token = Token::from_key(key)?;
        Ok(self.inner.add_node(key.to_string(), Node::new(token)))
    }

    /// Wire `dependent` under `governor`. A later edge for the same dependent wins.
    pub fn add_edge(&mut self, edge: &IndexedDependency) -> Result<()> {
        if edge.dependent() == ROOT_KEY {
            return Err(DeptreeError::MalformedInput(format!(
                "{ROOT_KEY} cannot be a dependent (edge {:?})",
                edge.label()
            )));
        }
        if edge.governor() == edge.dependent() {
            return Err(DeptreeError::MalformedInput(format!(
                "self-dependency on {}",
                edge.dependent()
            )));
        }

        let parent = self.get_or_create(edge.governor())?;
        let child = self.get_or_create(edge.dependent())?;

        if self.inner.parent(child).is_some() {
            tracing::debug!(
                "Re-parenting {} under {} ({})",
                edge.dependent(),
                edge.governor(),
                edge.label()
            );
        }
        self.inner.attach(parent, child);
        if let Some(node) = self.inner.topology.node_weight_mut(child) {
            node.dependency = Some(SmolStr::new(edge.label()));
        }
        Ok(())
    }

    pub fn add_edges(&mut self, edges: &[IndexedDependency]) -> Result<()> {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    /// Attach part-of-speech and entity tags by sentence position.
    ///
    /// Returns how many nodes were tagged. Positions without a node are skipped.
    pub fn apply_tags(&mut self, words: &[(String, WordAnnotation)]) -> usize {
        let mut tagged = 0;
        for (position, (surface, annotation)) in words.iter().enumerate() {
            if !is_content_word(surface) {
                continue;
            }
            let key = format!("{}-{}", surface, position + 1);
            let Some(&idx) = self.inner.key_index.get(&key) else {
                tracing::trace!("No node for {}, skipping tags", key);
                continue;
            };
            let Some(node) = self.inner.topology.node_weight_mut(idx) else {
                continue;
            };
            if let Some(token) = node.tokens_mut().first_mut() {
                token.part_of_speech = annotation.part_of_speech.clone();
            }
            if let Some(tag) = annotation.entity_tag() {
                node.entity = EntityKind::Tag(SmolStr::new(tag));
            }
            tagged += 1;
        }
        tagged
    }

    /// Freeze into a tree rooted at `ROOT-0` and stamp `text` on every reachable node.
    pub fn build(mut self, text: &str) -> Result<DependencyTree> {
        let root = *self.inner.key_index.get(ROOT_KEY).ok_or_else(|| {
            DeptreeError::MalformedInput(format!("edge list never references {ROOT_KEY}"))
        })?;

        let text: Arc<str> = Arc::from(text);
        self.inner.propagate_text(root, &text);

        tracing::debug!(
            "Built dependency tree with {} nodes",
            self.inner.topology.node_count()
        );
        Ok(DependencyTree::from_inner(self.inner, root, text))
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Punctuation never shows up as a tree node; content words start with an
/// alphanumeric character, `$` or `%`.
fn is_content_word(surface: &str) -> bool {
    surface
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '$' || c == '%')
}
