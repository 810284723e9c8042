use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Upload is not an image or cannot be decoded. The message is shown to the caller.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Failed to classify image: {0}")]
    InferenceError(String),

    /// Soft failure of an external data source. Never surfaced to API callers.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Not found")]
    NotFound,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
