use auth::Claims;
use auth::JwtHandler;
use chrono::Duration;

use crate::account::models::Username;
use crate::token::errors::TokenError;
use crate::token::ports::TokenServicePort;

/// HS256 token service.
///
/// Tokens are not stored, so a token stays valid until its expiry even if
/// the caller would like it revoked.
pub struct TokenService {
    jwt_handler: JwtHandler,
    lifetime: Duration,
}

impl TokenService {
    /// # Arguments
    /// * `secret` - Signing secret, used for both issuing and verifying
    /// * `lifetime` - Validity window of every issued token
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            lifetime,
        }
    }
}

impl TokenServicePort for TokenService {
    fn issue(&self, identity: &Username) -> Result<String, TokenError> {
        let claims = Claims::issue_now(identity, self.lifetime)
            .map_err(|e| TokenError::Issue(e.to_string()))?;

        self.jwt_handler
            .encode(&claims)
            .map_err(|e| TokenError::Issue(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<Username, TokenError> {
        let claims = self.jwt_handler.decode(token).map_err(|e| {
            tracing::warn!(error = %e, "Token rejected");
            TokenError::Unauthenticated(e.to_string())
        })?;

        if claims.sub.is_empty() {
            return Err(TokenError::Unauthenticated("Missing subject".to_string()));
        }

        Ok(Username::new(claims.sub))
    }
}
