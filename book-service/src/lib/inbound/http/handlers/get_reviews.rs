use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::book::models::Isbn;
use crate::book::ports::BookServicePort;
use crate::inbound::http::messages::ReviewMessage;
use crate::inbound::http::router::AppState;

pub async fn get_reviews(
    State(state): State<AppState>,
    isbn: Result<Path<String>, PathRejection>,
) -> Result<ApiSuccess<Vec<ReviewMessage>>, ApiError> {
    let Path(isbn) = isbn?;

    state
        .book_service
        .get_reviews(&Isbn::new(isbn))
        .await
        .map_err(ApiError::from)
        .map(|reviews| {
            ApiSuccess::new(
                StatusCode::OK,
                reviews.iter().map(ReviewMessage::from).collect(),
            )
        })
}
