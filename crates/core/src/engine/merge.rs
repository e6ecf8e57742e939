use super::graph::{DependencyTree, NodeId};
use crate::error::TreeError;

impl DependencyTree {
    /// Fuse `source` into `target`.
    ///
    /// `source`'s children are re-attached under `target` after its own children.
    /// With `merge_tokens`, `target` also takes over `source`'s tokens (kept
    /// sorted by index) and their surface keys; otherwise those tokens are
    /// dropped. `source` is removed from the arena and its id becomes invalid.
    pub fn merge(
        &mut self,
        target: NodeId,
        source: NodeId,
        merge_tokens: bool,
    ) -> Result<(), TreeError> {
        if !self.contains(target) {
            return Err(TreeError::UnknownNode(target));
        }
        if !self.contains(source) {
            return Err(TreeError::UnknownNode(source));
        }
        if target == source {
            return Err(TreeError::InvalidMerge(
                "a node cannot be merged into itself".to_string(),
            ));
        }
        if source == self.root() || self.is_ancestor(source, target) {
            return Err(TreeError::InvalidMerge(
                "source is an ancestor of target".to_string(),
            ));
        }

        for child in self.children(source) {
            self.inner.attach(target, child);
        }
        self.inner.detach(source);

        let tokens = self
            .inner
            .topology
            .node_weight_mut(source)
            .map(|node| node.take_tokens())
            .unwrap_or_default();
        self.inner.topology.remove_node(source);

        if merge_tokens {
            for id in self.inner.key_index.values_mut() {
                if *id == source {
                    *id = target;
                }
            }
            if let Some(node) = self.inner.topology.node_weight_mut(target) {
                node.absorb_tokens(tokens);
            }
        } else {
            self.inner.key_index.retain(|_, id| *id != source);
        }

        tracing::trace!(?target, ?source, merge_tokens, "Merged nodes");
        Ok(())
    }
}
