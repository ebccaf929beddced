//! Authentication primitives shared by the service crates.
//!
//! - Password hashing (Argon2id, tunable cost)
//! - HS256 access tokens with a required expiry
//!
//! Services wrap these in their own domain ports; nothing here knows about
//! accounts or HTTP.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::issue_now("alice", Duration::hours(1)).unwrap();
//! let token = handler.encode(&claims).unwrap();
//! assert_eq!(handler.decode(&token).unwrap().sub, "alice");
//! ```

pub mod jwt;
pub mod password;

pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::HashCost;
pub use password::PasswordError;
pub use password::PasswordHasher;
