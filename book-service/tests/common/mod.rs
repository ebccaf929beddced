#![allow(dead_code)]

use std::sync::Arc;

use auth::HashCost;
use auth::PasswordHasher;
use book_service::account::service::AccountService;
use book_service::book::models::default_seed;
use book_service::book::service::BookService;
use book_service::client::BookClient;
use book_service::inbound::http::router::create_router;
use book_service::repositories::InMemoryAccountRepository;
use book_service::repositories::InMemoryBookRepository;
use book_service::review::service::ReviewService;
use book_service::token::service::TokenService;
use serde_json::json;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Book present in the default catalog.
pub const DON_QUIXOTE: &str = "9780486821955";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub client: BookClient,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Cheap hashing keeps the suite fast
        let password_hasher = PasswordHasher::with_cost(HashCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .expect("Failed to build password hasher");

        let account_service = Arc::new(
            AccountService::new(Arc::new(InMemoryAccountRepository::new()), password_hasher)
                .expect("Failed to create account service"),
        );
        let token_service = Arc::new(TokenService::new(TEST_SECRET, chrono::Duration::hours(1)));

        let book_repository = Arc::new(
            InMemoryBookRepository::from_seed(default_seed()).expect("Failed to seed catalog"),
        );
        let book_service = Arc::new(BookService::new(Arc::clone(&book_repository)));
        let review_service = Arc::new(ReviewService::new(book_repository));

        let router = create_router(account_service, token_service, book_service, review_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        let client = BookClient::new(&address).expect("Failed to create book client");

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            client,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Register `username` and return a fresh token for it
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/register")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self
            .post("/api/login")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Login response has no token")
            .to_string()
    }
}
