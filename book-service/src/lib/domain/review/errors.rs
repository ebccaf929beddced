use thiserror::Error;

use crate::account::models::Username;
use crate::book::errors::BookError;
use crate::book::models::Isbn;

/// Error for review mutations
#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    #[error("Book not found: {0}")]
    BookNotFound(Isbn),

    #[error("Review not found for user {username} on book {isbn}")]
    ReviewNotFound { isbn: Isbn, username: Username },

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<BookError> for ReviewError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(isbn) => ReviewError::BookNotFound(isbn),
            BookError::Unknown(msg) => ReviewError::Unknown(msg),
        }
    }
}
