use thiserror::Error;

/// Error for token issuance and verification
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Missing, malformed, forged or expired token.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Token issuance failed: {0}")]
    Issue(String),
}
