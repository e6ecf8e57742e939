pub mod error;
pub mod lexical;
pub mod models;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use lexical::{Lemmatizer, SenseId, SenseInventory};
pub use models::*;
