pub mod parse;
pub mod pos;

pub use parse::*;
pub use pos::*;
