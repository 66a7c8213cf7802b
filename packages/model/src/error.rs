use thiserror::Error;

/// Errors raised while reading a document model
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
