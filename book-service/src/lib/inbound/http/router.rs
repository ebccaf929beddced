use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::books::books_by_author;
use super::handlers::books::books_by_title;
use super::handlers::books::get_book;
use super::handlers::books::list_books;
use super::handlers::delete_review::delete_review;
use super::handlers::get_reviews::get_reviews;
use super::handlers::login::login;
use super::handlers::method_not_allowed;
use super::handlers::not_found;
use super::handlers::register::register;
use super::handlers::upsert_review::upsert_review;
use super::middleware::authenticate as auth_middleware;
use crate::account::service::AccountService;
use crate::book::service::BookService;
use crate::outbound::repositories::InMemoryAccountRepository;
use crate::outbound::repositories::InMemoryBookRepository;
use crate::review::service::ReviewService;
use crate::token::service::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<InMemoryAccountRepository>>,
    pub token_service: Arc<TokenService>,
    pub book_service: Arc<BookService<InMemoryBookRepository>>,
    pub review_service: Arc<ReviewService<InMemoryBookRepository>>,
}

pub fn create_router(
    account_service: Arc<AccountService<InMemoryAccountRepository>>,
    token_service: Arc<TokenService>,
    book_service: Arc<BookService<InMemoryBookRepository>>,
    review_service: Arc<ReviewService<InMemoryBookRepository>>,
) -> Router {
    let state = AppState {
        account_service,
        token_service,
        book_service,
        review_service,
    };

    // The reviews path keeps this explicit 405 fallback when merged with the
    // protected router below, so unsupported methods skip authentication.
    let public_routes = Router::new()
        .route("/api/books", get(list_books).fallback(method_not_allowed))
        .route(
            "/api/books/:isbn",
            get(get_book).fallback(method_not_allowed),
        )
        .route(
            "/api/books/author/:author",
            get(books_by_author).fallback(method_not_allowed),
        )
        .route(
            "/api/books/title/:title",
            get(books_by_title).fallback(method_not_allowed),
        )
        .route(
            "/api/books/:isbn/reviews",
            get(get_reviews).fallback(method_not_allowed),
        )
        .route("/api/register", post(register).fallback(method_not_allowed))
        .route("/api/login", post(login).fallback(method_not_allowed));

    // Same path as the public review listing; the auth layer only wraps
    // these two methods.
    let protected_routes = Router::new()
        .route(
            "/api/books/:isbn/reviews",
            post(upsert_review).delete(delete_review),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(not_found)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
