//! Dependency tree engine
//!
//! - **Arena storage**: nodes live in a `StableDiGraph`, handles are plain indices
//! - **Key index**: `word-index` surface keys resolve to their current node
//! - **Builder / tree split**: `TreeBuilder` consumes parser output and yields a `DependencyTree`
//! - **Destructive merge**: `DependencyTree::merge` fuses two nodes and tombstones the source

pub mod builder;
pub mod graph;
mod merge;

pub use builder::TreeBuilder;
pub use graph::{ChildLink, DependencyTree, NodeId};
