use thiserror::Error;

/// Errors raised while ingesting comment payloads.
#[derive(Debug, Error)]
pub enum CommentError {
    #[error("failed to parse comment payload: {0}")]
    Parse(#[from] serde_json::Error),
}
