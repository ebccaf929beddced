use crate::account::models::Username;
use crate::token::errors::TokenError;

/// Port for stateless bearer tokens.
pub trait TokenServicePort: Send + Sync + 'static {
    /// Issue a signed, time-bounded token for a verified identity.
    ///
    /// # Errors
    /// * `Issue` - Signing failed
    fn issue(&self, identity: &Username) -> Result<String, TokenError>;

    /// Resolve a token back to the identity it was issued for.
    ///
    /// # Errors
    /// * `Unauthenticated` - Token is malformed, forged, or expired
    fn verify(&self, token: &str) -> Result<Username, TokenError>;
}
