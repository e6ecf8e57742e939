pub mod config;
pub mod error;
pub mod logging;

pub mod engine;
pub mod model;
pub mod normalize;
pub mod passes;
pub mod pipeline;
pub mod serialize;

pub use config::PipelineConfig;
pub use engine::{DependencyTree, NodeId, TreeBuilder};
pub use error::{DeptreeError, Result, TreeError};
pub use model::{EntityKind, Node, Token};
pub use normalize::{NounDeriver, Normalizer};
pub use passes::{MergePass, NamedEntityMerge, QuotationMerge};
pub use pipeline::Pipeline;
