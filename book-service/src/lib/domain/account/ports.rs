use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::RegisterCommand;
use crate::account::models::Username;

/// Port for the credential store.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account, storing only a salted hash of the password.
    ///
    /// # Errors
    /// * `AlreadyExists` - An account with this exact username exists
    /// * `Password` - Hashing failed
    async fn register(&self, command: RegisterCommand) -> Result<Username, AccountError>;

    /// Check a username/password pair and return the verified identity.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    async fn verify(&self, username: &Username, password: &str) -> Result<Username, AccountError>;
}

/// Storage for accounts.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Insert a new account.
    ///
    /// The existence check and the insert happen atomically.
    ///
    /// # Errors
    /// * `AlreadyExists` - Username is already taken; nothing is written
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve an account by exact username.
    async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, AccountError>;
}
