#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Malformed lexicon: {0}")]
    MalformedLexicon(String),
    #[error("Unknown part of speech: {0}")]
    UnknownPartOfSpeech(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
