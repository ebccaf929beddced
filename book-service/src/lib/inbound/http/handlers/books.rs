use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::book::models::Book;
use crate::book::models::Isbn;
use crate::book::ports::BookServicePort;
use crate::inbound::http::messages::BookMessage;
use crate::inbound::http::router::AppState;

fn to_messages(books: Vec<Book>) -> Vec<BookMessage> {
    books.iter().map(BookMessage::from).collect()
}

pub async fn list_books(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<BookMessage>>, ApiError> {
    state
        .book_service
        .list_books()
        .await
        .map_err(ApiError::from)
        .map(|books| ApiSuccess::new(StatusCode::OK, to_messages(books)))
}

pub async fn get_book(
    State(state): State<AppState>,
    isbn: Result<Path<String>, PathRejection>,
) -> Result<ApiSuccess<BookMessage>, ApiError> {
    let Path(isbn) = isbn?;

    state
        .book_service
        .get_book(&Isbn::new(isbn))
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}

pub async fn books_by_author(
    State(state): State<AppState>,
    author: Result<Path<String>, PathRejection>,
) -> Result<ApiSuccess<Vec<BookMessage>>, ApiError> {
    let Path(author) = author?;

    state
        .book_service
        .books_by_author(&author)
        .await
        .map_err(ApiError::from)
        .map(|books| ApiSuccess::new(StatusCode::OK, to_messages(books)))
}

pub async fn books_by_title(
    State(state): State<AppState>,
    title: Result<Path<String>, PathRejection>,
) -> Result<ApiSuccess<Vec<BookMessage>>, ApiError> {
    let Path(title) = title?;

    state
        .book_service
        .books_by_title(&title)
        .await
        .map_err(ApiError::from)
        .map(|books| ApiSuccess::new(StatusCode::OK, to_messages(books)))
}
