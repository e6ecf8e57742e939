//! Value types stored in the dependency tree arena.

pub mod node;
pub mod token;

pub use node::{EntityKind, Node};
pub use token::Token;
