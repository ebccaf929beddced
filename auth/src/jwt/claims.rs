use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Access token claims.
///
/// Binds a subject to an issue time and a hard expiry. Both timestamps are
/// Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the authenticated identity)
    pub sub: String,

    /// Issued at
    pub iat: i64,

    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Create claims for `subject` valid for `lifetime` starting at `issued_at`.
    ///
    /// # Errors
    /// * `ExpiryOutOfRange` - `issued_at + lifetime` is not a representable time
    pub fn new(
        subject: impl ToString,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Result<Self, JwtError> {
        let expires_at = issued_at
            .checked_add_signed(lifetime)
            .ok_or(JwtError::ExpiryOutOfRange)?;

        Ok(Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Create claims for `subject` valid for `lifetime` from now.
    pub fn issue_now(subject: impl ToString, lifetime: Duration) -> Result<Self, JwtError> {
        Self::new(subject, Utc::now(), lifetime)
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }
}
