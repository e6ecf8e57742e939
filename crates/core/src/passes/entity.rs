use super::MergePass;
use crate::engine::{DependencyTree, NodeId};
use crate::error::Result;
use deptree_api::SentenceParse;
use indexmap::IndexMap;
use smol_str::SmolStr;

/// Collapses contiguous spans sharing a named-entity tag into one node.
///
/// First every child tagged like its parent is folded into the parent
/// (children-first, so chains collapse bottom-up), then siblings sharing a tag
/// are folded together. Either fold only happens when the two nodes' tokens
/// form one contiguous span: the sentence positions between them, if any, must
/// all carry the same tag in the parser annotations (`Bank of America`), which
/// keeps `Obama met Clinton` as two entities.
#[derive(Debug, Default, Clone, Copy)]
pub struct NamedEntityMerge;

/// Entity tag per sentence position (index 0 is position 1).
type PositionTags<'a> = [Option<&'a str>];

impl NamedEntityMerge {
    pub fn new() -> Self {
        Self
    }

    fn tag_of(tree: &DependencyTree, id: NodeId) -> Option<SmolStr> {
        tree.node(id)
            .and_then(|node| node.entity.tag())
            .map(SmolStr::new)
    }

    /// First and last token index of a node.
    fn extent(tree: &DependencyTree, id: NodeId) -> Option<(u32, u32)> {
        let tokens = tree.node(id)?.tokens();
        Some((tokens.first()?.index(), tokens.last()?.index()))
    }

    /// Whether `a` and `b` touch, or are separated only by positions tagged `tag`.
    fn contiguous(
        tree: &DependencyTree,
        a: NodeId,
        b: NodeId,
        tag: &str,
        tags: &PositionTags<'_>,
    ) -> bool {
        let (Some((a_first, a_last)), Some((b_first, b_last))) =
            (Self::extent(tree, a), Self::extent(tree, b))
        else {
            return false;
        };
        let (gap_start, gap_end) = if a_last < b_first {
            (a_last + 1, b_first)
        } else if b_last < a_first {
            (b_last + 1, a_first)
        } else {
            // Interleaved extents already share the span
            return true;
        };
        (gap_start..gap_end).all(|position| {
            tags.get(position as usize - 1).copied().flatten() == Some(tag)
        })
    }

    fn merge_into_parents(tree: &mut DependencyTree, tags: &PositionTags<'_>) -> Result<usize> {
        let mut merged = 0;
        for id in tree.post_order() {
            if !tree.contains(id) {
                continue;
            }
            let Some(tag) = Self::tag_of(tree, id) else {
                continue;
            };
            let Some(parent) = tree.parent(id) else {
                continue;
            };
            if Self::tag_of(tree, parent).as_ref() == Some(&tag)
                && Self::contiguous(tree, parent, id, &tag, tags)
            {
                tree.merge(parent, id, true)?;
                merged += 1;
            }
        }
        Ok(merged)
    }

    fn merge_siblings(tree: &mut DependencyTree, tags: &PositionTags<'_>) -> Result<usize> {
        let mut merged = 0;
        for id in tree.pre_order() {
            if !tree.contains(id) {
                continue;
            }
            let mut groups: IndexMap<SmolStr, Vec<NodeId>> = IndexMap::new();
            for child in tree.children(id) {
                let Some(tag) = Self::tag_of(tree, child) else {
                    continue;
                };
                let group = groups.entry(tag.clone()).or_default();
                let target = group
                    .iter()
                    .copied()
                    .find(|&other| Self::contiguous(tree, other, child, &tag, tags));
                match target {
                    Some(target) => {
                        tree.merge(target, child, true)?;
                        merged += 1;
                    }
                    None => group.push(child),
                }
            }
        }
        Ok(merged)
    }
}

impl MergePass for NamedEntityMerge {
    fn name(&self) -> &'static str {
        "named-entity"
    }

    fn apply(&self, tree: &mut DependencyTree, parse: &SentenceParse) -> Result<()> {
        let tags: Vec<Option<&str>> = parse
            .words
            .iter()
            .map(|(_, annotation)| annotation.entity_tag())
            .collect();
        let vertical = Self::merge_into_parents(tree, &tags)?;
        let horizontal = Self::merge_siblings(tree, &tags)?;
        tracing::debug!(
            "Entity merge: {} child-parent, {} sibling",
            vertical,
            horizontal
        );
        Ok(())
    }
}
