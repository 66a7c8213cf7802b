use crate::error::ModelError;

/// Result type alias for document model loading
pub type ModelResult<T> = Result<T, ModelError>;
