use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use crate::book::models::Isbn;
use crate::inbound::http::messages::MessageResponse;
use crate::inbound::http::messages::ReviewRequest;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::review::ports::ReviewServicePort;

/// Create or replace the caller's review. Both cases answer 201.
pub async fn upsert_review(
    State(state): State<AppState>,
    isbn: Result<Path<String>, PathRejection>,
    Extension(user): Extension<AuthenticatedUser>,
    body: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<ApiSuccess<MessageResponse>, ApiError> {
    let Path(isbn) = isbn?;
    let Json(body) = body?;

    state
        .review_service
        .upsert_review(&Isbn::new(isbn), &user.username, body.review)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                MessageResponse::new("Review added/modified successfully"),
            )
        })
}
