use async_trait::async_trait;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookFilter;
use crate::book::models::Isbn;
use crate::review::models::Review;
use crate::review::models::ReviewMutation;
use crate::review::models::ReviewOutcome;

/// Read-only catalog operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// All books in insertion order.
    async fn list_books(&self) -> Result<Vec<Book>, BookError>;

    /// # Errors
    /// * `NotFound` - No book with this ISBN
    async fn get_book(&self, isbn: &Isbn) -> Result<Book, BookError>;

    /// Books whose author contains `query`, ignoring case.
    async fn books_by_author(&self, query: &str) -> Result<Vec<Book>, BookError>;

    /// Books whose title contains `query`, ignoring case.
    async fn books_by_title(&self, query: &str) -> Result<Vec<Book>, BookError>;

    /// Reviews of one book, possibly empty.
    ///
    /// # Errors
    /// * `NotFound` - No book with this ISBN
    async fn get_reviews(&self, isbn: &Isbn) -> Result<Vec<Review>, BookError>;
}

/// Storage for books and their nested reviews.
///
/// Reads return owned snapshots. Review mutations are applied atomically per
/// call; the rules for how a mutation changes the review list live in
/// [`crate::review::models::Reviews`], not here.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Book>, BookError>;

    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>, BookError>;

    async fn find_matching(&self, filter: &BookFilter) -> Result<Vec<Book>, BookError>;

    /// Apply `mutation` to the reviews of the book with `isbn`.
    ///
    /// # Returns
    /// `None` when no such book exists, otherwise the mutation outcome
    async fn apply_review_mutation(
        &self,
        isbn: &Isbn,
        mutation: ReviewMutation,
    ) -> Result<Option<ReviewOutcome>, BookError>;
}
