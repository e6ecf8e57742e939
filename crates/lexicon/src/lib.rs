//! In-memory WordNet-style lexical store.
//!
//! Provides the lemmatizer and sense inventory the normalizer consumes. Data is
//! loaded from JSON; a small seed lexicon is compiled in for tools and tests.

pub mod builder;
pub mod data;
pub mod morphy;
pub mod store;

pub use builder::LexiconBuilder;
pub use data::{LemmaData, LexiconData, RelatedForm, SynsetData};
pub use store::LexiconStore;
