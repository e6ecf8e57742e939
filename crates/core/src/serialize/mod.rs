//! Renderings of a dependency tree for inspection.

pub mod dot;
pub mod json;

pub use dot::to_dot;
pub use json::{TreeSnapshot, to_json};
