//! Typed HTTP client for the book review API.

use reqwest::RequestBuilder;
use reqwest::Response;
use reqwest::StatusCode;
use reqwest::Url;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::inbound::http::messages::BookMessage;
use crate::inbound::http::messages::CredentialsRequest;
use crate::inbound::http::messages::MessageResponse;
use crate::inbound::http::messages::ReviewMessage;
use crate::inbound::http::messages::ReviewRequest;
use crate::inbound::http::messages::TokenResponse;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    /// HTTP status of an API error, `None` for other failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            ClientError::InvalidBaseUrl(_) => None,
        }
    }
}

/// Client for one server, e.g. `BookClient::new("http://localhost:5000")`.
#[derive(Debug, Clone)]
pub struct BookClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BookClient {
    /// # Errors
    /// * `InvalidBaseUrl` - `base_url` is not an absolute http(s) URL
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self { http, base_url })
    }

    /// Build `{base}/api/{segments...}`; each segment is percent-encoded.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    pub async fn get_all_books(&self) -> Result<Vec<BookMessage>, ClientError> {
        send(self.http.get(self.url(&["books"]))).await
    }

    pub async fn search_by_isbn(&self, isbn: &str) -> Result<BookMessage, ClientError> {
        send(self.http.get(self.url(&["books", isbn]))).await
    }

    pub async fn search_by_author(&self, author: &str) -> Result<Vec<BookMessage>, ClientError> {
        send(self.http.get(self.url(&["books", "author", author]))).await
    }

    pub async fn search_by_title(&self, title: &str) -> Result<Vec<BookMessage>, ClientError> {
        send(self.http.get(self.url(&["books", "title", title]))).await
    }

    pub async fn get_reviews(&self, isbn: &str) -> Result<Vec<ReviewMessage>, ClientError> {
        send(self.http.get(self.reviews_url(isbn))).await
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<(), ClientError> {
        send::<MessageResponse>(
            self.http
                .post(self.url(&["register"]))
                .json(&credentials(username, password)),
        )
        .await
        .map(|_| ())
    }

    /// Log in and return the access token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ClientError> {
        send::<TokenResponse>(
            self.http
                .post(self.url(&["login"]))
                .json(&credentials(username, password)),
        )
        .await
        .map(|body| body.token)
    }

    pub async fn upsert_review(
        &self,
        token: &str,
        isbn: &str,
        review: &str,
    ) -> Result<(), ClientError> {
        send::<MessageResponse>(
            self.http
                .post(self.reviews_url(isbn))
                .bearer_auth(token)
                .json(&ReviewRequest {
                    review: review.to_string(),
                }),
        )
        .await
        .map(|_| ())
    }

    pub async fn delete_review(&self, token: &str, isbn: &str) -> Result<(), ClientError> {
        send::<MessageResponse>(self.http.delete(self.reviews_url(isbn)).bearer_auth(token))
            .await
            .map(|_| ())
    }

    fn reviews_url(&self, isbn: &str) -> Url {
        self.url(&["books", isbn, "reviews"])
    }
}

fn credentials(username: &str, password: &str) -> CredentialsRequest {
    CredentialsRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request.send().await?;
    parse(response).await
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<MessageResponse>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };

    Err(ClientError::Api { status, message })
}
