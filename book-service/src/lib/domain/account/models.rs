use std::fmt;

/// Registered account.
///
/// Created once on registration and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Account {
    pub username: Username,
    pub password_hash: String,
}

/// Case-sensitive account identity.
///
/// The same value is carried as the subject of access tokens and as the
/// owner key of reviews.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new account.
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub password: String,
}

impl RegisterCommand {
    /// # Arguments
    /// * `username` - Requested identity
    /// * `password` - Plain text password (hashed by the service)
    pub fn new(username: Username, password: String) -> Self {
        Self { username, password }
    }
}
