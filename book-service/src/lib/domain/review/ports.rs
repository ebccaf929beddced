use async_trait::async_trait;

use crate::account::models::Username;
use crate::book::models::Isbn;
use crate::review::errors::ReviewError;
use crate::review::models::Review;
use crate::review::models::ReviewOutcome;

/// Port for per-user review mutations.
///
/// `identity` must come from a verified token.
#[async_trait]
pub trait ReviewServicePort: Send + Sync + 'static {
    /// Create the identity's review of a book, or replace its text.
    ///
    /// # Returns
    /// `Created` or `Updated`
    ///
    /// # Errors
    /// * `BookNotFound` - No book with this ISBN
    async fn upsert_review(
        &self,
        isbn: &Isbn,
        identity: &Username,
        text: String,
    ) -> Result<ReviewOutcome, ReviewError>;

    /// Delete the identity's review of a book.
    ///
    /// # Returns
    /// The removed review
    ///
    /// # Errors
    /// * `BookNotFound` - No book with this ISBN
    /// * `ReviewNotFound` - The identity has no review on this book
    async fn delete_review(&self, isbn: &Isbn, identity: &Username)
        -> Result<Review, ReviewError>;
}
