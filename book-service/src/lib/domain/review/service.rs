use std::sync::Arc;

use async_trait::async_trait;

use crate::account::models::Username;
use crate::book::models::Isbn;
use crate::book::ports::BookRepository;
use crate::review::errors::ReviewError;
use crate::review::models::Review;
use crate::review::models::ReviewMutation;
use crate::review::models::ReviewOutcome;
use crate::review::ports::ReviewServicePort;

/// Review manager.
///
/// Every mutation is keyed by (book, identity), so a user can only ever
/// touch their own review.
pub struct ReviewService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> ReviewService<BR>
where
    BR: BookRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }

    async fn apply(
        &self,
        isbn: &Isbn,
        mutation: ReviewMutation,
    ) -> Result<ReviewOutcome, ReviewError> {
        self.repository
            .apply_review_mutation(isbn, mutation)
            .await?
            .ok_or_else(|| ReviewError::BookNotFound(isbn.clone()))
    }
}

#[async_trait]
impl<BR> ReviewServicePort for ReviewService<BR>
where
    BR: BookRepository,
{
    async fn upsert_review(
        &self,
        isbn: &Isbn,
        identity: &Username,
        text: String,
    ) -> Result<ReviewOutcome, ReviewError> {
        let review = Review::new(identity.clone(), text);
        let outcome = self.apply(isbn, ReviewMutation::Upsert(review)).await?;

        tracing::info!(
            isbn = %isbn,
            username = %identity,
            outcome = ?outcome,
            "Review saved"
        );

        Ok(outcome)
    }

    async fn delete_review(
        &self,
        isbn: &Isbn,
        identity: &Username,
    ) -> Result<Review, ReviewError> {
        match self
            .apply(isbn, ReviewMutation::Delete(identity.clone()))
            .await?
        {
            ReviewOutcome::Deleted(review) => {
                tracing::info!(isbn = %isbn, username = %identity, "Review deleted");
                Ok(review)
            }
            ReviewOutcome::Missing => Err(ReviewError::ReviewNotFound {
                isbn: isbn.clone(),
                username: identity.clone(),
            }),
            outcome => Err(ReviewError::Unknown(format!(
                "Unexpected outcome for delete: {:?}",
                outcome
            ))),
        }
    }
}
