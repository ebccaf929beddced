pub mod client;
pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::account;
pub use domain::book;
pub use domain::review;
pub use domain::token;
pub use outbound::repositories;
