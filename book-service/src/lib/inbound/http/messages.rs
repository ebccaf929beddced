//! Serializable message types for the HTTP layer.
//!
//! Domain models stay free of serde; these types fix the JSON shape on the
//! wire and are shared by the handlers and by [`crate::client::BookClient`].

use serde::Deserialize;
use serde::Serialize;

use crate::book::models::Book;
use crate::review::models::Review;

/// Book as returned by the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMessage {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub reviews: Vec<ReviewMessage>,
}

impl From<&Book> for BookMessage {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn.to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            reviews: book.reviews.iter().map(ReviewMessage::from).collect(),
        }
    }
}

/// Review on the wire: the text travels under `review`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewMessage {
    pub username: String,
    pub review: String,
}

impl From<&Review> for ReviewMessage {
    fn from(review: &Review) -> Self {
        Self {
            username: review.username.to_string(),
            review: review.text.clone(),
        }
    }
}

/// Body of `POST /api/register` and `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/books/:isbn/reviews`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub review: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Plain acknowledgement, also the shape of every error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
