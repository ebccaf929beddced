use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookFilter;
use crate::book::models::Isbn;
use crate::book::ports::BookRepository;
use crate::review::models::ReviewMutation;
use crate::review::models::ReviewOutcome;

/// Error loading the startup catalog
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate ISBN in seed: {0}")]
    DuplicateIsbn(String),
}

#[derive(Debug, Deserialize)]
struct SeedBook {
    isbn: String,
    title: String,
    author: String,
}

/// Process-lifetime catalog.
///
/// Books sit in insertion order behind a single `RwLock`. Reads clone out a
/// snapshot; a review mutation holds the write lock only while the one
/// book's review list is changed.
#[derive(Debug)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    /// # Errors
    /// * `DuplicateIsbn` - Two seed books share an ISBN
    pub fn from_seed(books: Vec<Book>) -> Result<Self, SeedError> {
        let mut seen = HashSet::new();
        for book in &books {
            if !seen.insert(book.isbn.clone()) {
                return Err(SeedError::DuplicateIsbn(book.isbn.to_string()));
            }
        }

        Ok(Self {
            books: RwLock::new(books),
        })
    }

    /// Load the catalog from a JSON array of `{isbn, title, author}`.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SeedError::Io {
                path: display.clone(),
                source,
            })?;

        let seed: Vec<SeedBook> = serde_json::from_str(&raw).map_err(|source| {
            SeedError::Parse {
                path: display,
                source,
            }
        })?;

        Self::from_seed(
            seed.into_iter()
                .map(|b| Book::new(Isbn::new(b.isbn), b.title, b.author))
                .collect(),
        )
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        Ok(self.books.read().await.clone())
    }

    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>, BookError> {
        Ok(self
            .books
            .read()
            .await
            .iter()
            .find(|book| &book.isbn == isbn)
            .cloned())
    }

    async fn find_matching(&self, filter: &BookFilter) -> Result<Vec<Book>, BookError> {
        Ok(self
            .books
            .read()
            .await
            .iter()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect())
    }

    async fn apply_review_mutation(
        &self,
        isbn: &Isbn,
        mutation: ReviewMutation,
    ) -> Result<Option<ReviewOutcome>, BookError> {
        let mut books = self.books.write().await;

        Ok(books
            .iter_mut()
            .find(|book| &book.isbn == isbn)
            .map(|book| book.reviews.apply(mutation)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::account::models::Username;
    use crate::book::models::default_seed;
    use crate::review::models::Review;

    fn repository() -> InMemoryBookRepository {
        InMemoryBookRepository::from_seed(default_seed()).unwrap()
    }

    #[tokio::test]
    async fn test_list_all_in_insertion_order() {
        let titles: Vec<_> = repository()
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|book| book.title)
            .collect();

        assert_eq!(
            titles,
            vec![
                "Don Quixote",
                "Alice's Adventures in Wonderland",
                "Pride and Prejudice"
            ]
        );
    }

    #[tokio::test]
    async fn test_find_matching_author() {
        let books = repository()
            .find_matching(&BookFilter::Author("cervantes".to_string()))
            .await
            .unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].isbn.as_str(), "9780486821955");
    }

    #[tokio::test]
    async fn test_mutation_on_unknown_book_is_none() {
        let outcome = repository()
            .apply_review_mutation(
                &Isbn::new("missing"),
                ReviewMutation::Delete(Username::new("bob")),
            )
            .await
            .unwrap();

        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn test_snapshots_do_not_alias_storage() {
        let repository = repository();
        let isbn = Isbn::new("9780486821955");

        let before = repository.find_by_isbn(&isbn).await.unwrap().unwrap();
        repository
            .apply_review_mutation(
                &isbn,
                ReviewMutation::Upsert(Review::new(Username::new("bob"), "great".to_string())),
            )
            .await
            .unwrap();
        let after = repository.find_by_isbn(&isbn).await.unwrap().unwrap();

        assert!(before.reviews.is_empty());
        assert_eq!(after.reviews.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_upserts_from_one_user_leave_one_review() {
        let repository = Arc::new(repository());
        let isbn = Isbn::new("9781786751041");

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let repository = Arc::clone(&repository);
                let isbn = isbn.clone();
                tokio::spawn(async move {
                    repository
                        .apply_review_mutation(
                            &isbn,
                            ReviewMutation::Upsert(Review::new(
                                Username::new("bob"),
                                format!("take {}", i),
                            )),
                        )
                        .await
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let book = repository.find_by_isbn(&isbn).await.unwrap().unwrap();
        assert_eq!(book.reviews.len(), 1);
    }

    #[test]
    fn test_duplicate_seed_isbn_rejected() {
        let mut seed = default_seed();
        seed.push(Book::new(Isbn::new("9780486821955"), "Copy", "Someone"));

        assert!(matches!(
            InMemoryBookRepository::from_seed(seed),
            Err(SeedError::DuplicateIsbn(isbn)) if isbn == "9780486821955"
        ));
    }

    #[tokio::test]
    async fn test_from_seed_file() {
        let path = std::env::temp_dir().join(format!("book-seed-{}.json", std::process::id()));
        tokio::fs::write(
            &path,
            r#"[{"isbn": "111", "title": "Dune", "author": "Frank Herbert"}]"#,
        )
        .await
        .unwrap();

        let repository = InMemoryBookRepository::from_seed_file(&path).await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        let books = repository.list_all().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
    }

    #[tokio::test]
    async fn test_from_missing_seed_file() {
        let result = InMemoryBookRepository::from_seed_file("/nonexistent/seed.json").await;
        assert!(matches!(result, Err(SeedError::Io { .. })));
    }
}
