use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use crate::account::models::Username;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::messages::CredentialsRequest;
use crate::inbound::http::messages::TokenResponse;
use crate::inbound::http::router::AppState;
use crate::token::ports::TokenServicePort;

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<ApiSuccess<TokenResponse>, ApiError> {
    let Json(body) = body?;

    let identity = state
        .account_service
        .verify(&Username::new(body.username), &body.password)
        .await?;

    let token = state.token_service.issue(&identity)?;

    tracing::info!(username = %identity, "Token issued");

    Ok(ApiSuccess::new(StatusCode::OK, TokenResponse { token }))
}
