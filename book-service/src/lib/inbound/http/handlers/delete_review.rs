use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::book::models::Isbn;
use crate::inbound::http::messages::MessageResponse;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::review::ports::ReviewServicePort;

pub async fn delete_review(
    State(state): State<AppState>,
    isbn: Result<Path<String>, PathRejection>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let Path(isbn) = isbn?;

    state
        .review_service
        .delete_review(&Isbn::new(isbn), &user.username)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageResponse::new("Review deleted successfully"),
            )
        })
}
