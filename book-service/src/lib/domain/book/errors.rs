use thiserror::Error;

use crate::book::models::Isbn;

/// Error for catalog operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    #[error("Book not found: {0}")]
    NotFound(Isbn),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for BookError {
    fn from(err: anyhow::Error) -> Self {
        BookError::Unknown(err.to_string())
    }
}
