use std::sync::Arc;

use auth::PasswordHasher;
use book_service::account::service::AccountService;
use book_service::book::models::default_seed;
use book_service::book::service::BookService;
use book_service::config::Config;
use book_service::inbound::http::router::create_router;
use book_service::repositories::InMemoryAccountRepository;
use book_service::repositories::InMemoryBookRepository;
use book_service::review::service::ReviewService;
use book_service::token::service::TokenService;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "book-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_lifetime_hours = config.jwt.expiration_hours,
        seed_file = ?config.catalog.seed_file,
        "Configuration loaded"
    );

    let password_hasher = PasswordHasher::with_cost(config.password.into())?;
    let account_repository = Arc::new(InMemoryAccountRepository::new());
    let account_service = Arc::new(AccountService::new(account_repository, password_hasher)?);

    let book_repository = match &config.catalog.seed_file {
        Some(path) => Arc::new(InMemoryBookRepository::from_seed_file(path).await?),
        None => Arc::new(InMemoryBookRepository::from_seed(default_seed())?),
    };
    tracing::info!(books = book_repository.len().await, "Catalog seeded");

    let token_service = Arc::new(TokenService::new(
        config.jwt.secret.as_bytes(),
        chrono::Duration::hours(config.jwt.expiration_hours),
    ));
    let book_service = Arc::new(BookService::new(Arc::clone(&book_repository)));
    let review_service = Arc::new(ReviewService::new(book_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application =
        create_router(account_service, token_service, book_service, review_service);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
