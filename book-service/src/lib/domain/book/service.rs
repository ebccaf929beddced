use std::sync::Arc;

use async_trait::async_trait;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookFilter;
use crate::book::models::Isbn;
use crate::book::ports::BookRepository;
use crate::book::ports::BookServicePort;
use crate::review::models::Review;

/// Catalog service.
pub struct BookService<BR>
where
    BR: BookRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookServicePort for BookService<BR>
where
    BR: BookRepository,
{
    async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        self.repository.list_all().await
    }

    async fn get_book(&self, isbn: &Isbn) -> Result<Book, BookError> {
        self.repository
            .find_by_isbn(isbn)
            .await?
            .ok_or_else(|| BookError::NotFound(isbn.clone()))
    }

    async fn books_by_author(&self, query: &str) -> Result<Vec<Book>, BookError> {
        self.repository
            .find_matching(&BookFilter::Author(query.to_string()))
            .await
    }

    async fn books_by_title(&self, query: &str) -> Result<Vec<Book>, BookError> {
        self.repository
            .find_matching(&BookFilter::Title(query.to_string()))
            .await
    }

    async fn get_reviews(&self, isbn: &Isbn) -> Result<Vec<Review>, BookError> {
        self.get_book(isbn)
            .await
            .map(|book| book.reviews.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::account::models::Username;
    use crate::book::models::default_seed;
    use crate::review::models::ReviewMutation;
    use crate::review::models::ReviewOutcome;

    mock! {
        pub TestBookRepository {}

        #[async_trait]
        impl BookRepository for TestBookRepository {
            async fn list_all(&self) -> Result<Vec<Book>, BookError>;
            async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>, BookError>;
            async fn find_matching(&self, filter: &BookFilter) -> Result<Vec<Book>, BookError>;
            async fn apply_review_mutation(
                &self,
                isbn: &Isbn,
                mutation: ReviewMutation,
            ) -> Result<Option<ReviewOutcome>, BookError>;
        }
    }

    #[tokio::test]
    async fn test_list_books_keeps_repository_order() {
        let mut repository = MockTestBookRepository::new();
        repository
            .expect_list_all()
            .times(1)
            .returning(|| Ok(default_seed()));

        let service = BookService::new(Arc::new(repository));

        let isbns: Vec<_> = service
            .list_books()
            .await
            .unwrap()
            .into_iter()
            .map(|book| book.isbn.to_string())
            .collect();

        assert_eq!(isbns, vec!["9780486821955", "9781786751041", "9780679601685"]);
    }

    #[tokio::test]
    async fn test_get_book_not_found() {
        let mut repository = MockTestBookRepository::new();
        repository
            .expect_find_by_isbn()
            .times(1)
            .returning(|_| Ok(None));

        let service = BookService::new(Arc::new(repository));

        let result = service.get_book(&Isbn::new("0000000000")).await;
        assert!(matches!(result, Err(BookError::NotFound(isbn)) if isbn.as_str() == "0000000000"));
    }

    #[tokio::test]
    async fn test_books_by_title_builds_title_filter() {
        let mut repository = MockTestBookRepository::new();
        repository
            .expect_find_matching()
            .withf(|filter| *filter == BookFilter::Title("alice".to_string()))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = BookService::new(Arc::new(repository));

        assert!(service.books_by_title("alice").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_reviews_returns_book_reviews() {
        let mut repository = MockTestBookRepository::new();
        repository.expect_find_by_isbn().times(1).returning(|isbn| {
            let mut book = Book::new(isbn.clone(), "Title", "Author");
            book.reviews
                .upsert(Review::new(Username::new("bob"), "great".to_string()));
            Ok(Some(book))
        });

        let service = BookService::new(Arc::new(repository));

        let reviews = service.get_reviews(&Isbn::new("1")).await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].username.as_str(), "bob");
    }

    #[tokio::test]
    async fn test_get_reviews_unknown_book() {
        let mut repository = MockTestBookRepository::new();
        repository
            .expect_find_by_isbn()
            .times(1)
            .returning(|_| Ok(None));

        let service = BookService::new(Arc::new(repository));

        let result = service.get_reviews(&Isbn::new("nope")).await;
        assert!(matches!(result, Err(BookError::NotFound(_))));
    }
}
