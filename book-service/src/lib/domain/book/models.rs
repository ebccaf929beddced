use std::fmt;

use crate::review::models::Reviews;

/// Catalog entry together with its reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub reviews: Reviews,
}

impl Book {
    /// Create a book with no reviews.
    pub fn new(isbn: Isbn, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn,
            title: title.into(),
            author: author.into(),
            reviews: Reviews::default(),
        }
    }
}

/// Book key. Compared verbatim; no checksum or hyphen normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self(isbn.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Case-insensitive substring filter over catalog fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    Author(String),
    Title(String),
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        let (field, query) = match self {
            BookFilter::Author(query) => (&book.author, query),
            BookFilter::Title(query) => (&book.title, query),
        };

        field.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Books present at startup.
pub fn default_seed() -> Vec<Book> {
    vec![
        Book::new(
            Isbn::new("9780486821955"),
            "Don Quixote",
            "Miguel de Cervantes",
        ),
        Book::new(
            Isbn::new("9781786751041"),
            "Alice's Adventures in Wonderland",
            "Lewis Caroll",
        ),
        Book::new(
            Isbn::new("9780679601685"),
            "Pride and Prejudice",
            "Jane Austen",
        ),
    ]
}
