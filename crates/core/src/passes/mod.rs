//! Span-merging passes applied between tree construction and normalization.
//!
//! Each pass decides which nodes belong together and fuses them with
//! [`DependencyTree::merge`].

pub mod entity;
pub mod quotation;

pub use entity::NamedEntityMerge;
pub use quotation::QuotationMerge;

use crate::engine::DependencyTree;
use crate::error::Result;
use deptree_api::SentenceParse;

pub trait MergePass: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, tree: &mut DependencyTree, parse: &SentenceParse) -> Result<()>;
}
