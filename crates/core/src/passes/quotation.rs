use super::MergePass;
use crate::engine::{DependencyTree, NodeId};
use crate::error::Result;
use crate::model::EntityKind;
use deptree_api::SentenceParse;
use smol_str::SmolStr;
use std::ops::RangeInclusive;

/// Tag given to a node holding a whole quoted span.
pub const QUOTATION_TAG: &str = "QUOTATION";

/// Collapses every quoted span into the shallowest node that covers part of it.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuotationMerge;

impl QuotationMerge {
    pub fn new() -> Self {
        Self
    }

    fn merge_span(tree: &mut DependencyTree, span: &RangeInclusive<u32>) -> Result<()> {
        let members: Vec<NodeId> = tree
            .pre_order()
            .into_iter()
            .filter(|&id| {
                tree.node(id)
                    .is_some_and(|node| node.tokens().iter().any(|t| span.contains(&t.index())))
            })
            .collect();

        let Some(top) = members.iter().copied().min_by_key(|&id| {
            let depth = tree.depth(id).unwrap_or(usize::MAX);
            let first = tree.node(id).map(|n| n.head().index()).unwrap_or(u32::MAX);
            (depth, first)
        }) else {
            return Ok(());
        };

        for &other in &members {
            if other != top && tree.contains(other) {
                tree.merge(top, other, true)?;
            }
        }
        if let Some(node) = tree.node_mut(top) {
            node.entity = EntityKind::Tag(SmolStr::new(QUOTATION_TAG));
        }
        tracing::debug!(
            "Merged quotation {:?} into {} node(s)",
            span,
            members.len()
        );
        Ok(())
    }
}

impl MergePass for QuotationMerge {
    fn name(&self) -> &'static str {
        "quotation"
    }

    fn apply(&self, tree: &mut DependencyTree, parse: &SentenceParse) -> Result<()> {
        let surfaces: Vec<&str> = parse.words.iter().map(|(w, _)| w.as_str()).collect();
        for span in quotation_spans(&surfaces) {
            Self::merge_span(tree, &span)?;
        }
        Ok(())
    }
}

/// Inner index ranges (1-based, quote marks excluded) of every closed quotation.
///
/// The parser writes opening quotes as ``` `` ``` and closing ones as `''`; a bare
/// `"` or curly quotes toggle. Unclosed and empty quotations are ignored.
pub fn quotation_spans(words: &[&str]) -> Vec<RangeInclusive<u32>> {
    let mut spans = Vec::new();
    let mut open: Option<u32> = None;
    for (position, word) in words.iter().enumerate() {
        let index = position as u32 + 1;
        let is_open = matches!(*word, "``" | "\u{201c}") || (*word == "\"" && open.is_none());
        let is_close = matches!(*word, "''" | "\u{201d}") || (*word == "\"" && open.is_some());
        if is_open {
            open = Some(index);
        } else if is_close {
            if let Some(start) = open.take() {
                if index > start + 1 {
                    spans.push(start + 1..=index - 1);
                }
            }
        }
    }
    spans
}
