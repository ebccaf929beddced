use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::RegisterCommand;
use crate::account::models::Username;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;

/// Credential store backed by an [`AccountRepository`].
///
/// Hashing runs on the blocking pool. Logins for unknown usernames are
/// checked against `dummy_hash` so both failure paths pay the same
/// hashing cost.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    password_hasher: PasswordHasher,
    dummy_hash: String,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service.
    ///
    /// # Errors
    /// * `Password` - The dummy hash could not be computed with this hasher
    pub fn new(repository: Arc<AR>, password_hasher: PasswordHasher) -> Result<Self, AccountError> {
        let dummy_hash = password_hasher.hash("dummy-password-for-unknown-accounts")?;

        Ok(Self {
            repository,
            password_hasher,
            dummy_hash,
        })
    }

    async fn hash_password(&self, password: String) -> Result<String, AccountError> {
        let hasher = self.password_hasher.clone();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AccountError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(AccountError::from)
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AccountError> {
        let hasher = self.password_hasher.clone();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AccountError::Unknown(format!("Verification task failed: {}", e)))?
            .map_err(AccountError::from)
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Username, AccountError> {
        // Cheap pre-check to skip hashing for a name that is already taken.
        // The repository re-checks under its write lock.
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(AccountError::AlreadyExists(command.username.to_string()));
        }

        let password_hash = self.hash_password(command.password).await?;

        let account = self
            .repository
            .create(Account {
                username: command.username,
                password_hash,
            })
            .await?;

        tracing::info!(username = %account.username, "Account registered");

        Ok(account.username)
    }

    async fn verify(&self, username: &Username, password: &str) -> Result<Username, AccountError> {
        let account = self.repository.find_by_username(username).await?;

        let stored_hash = account
            .as_ref()
            .map(|a| a.password_hash.clone())
            .unwrap_or_else(|| self.dummy_hash.clone());

        let password_matches = self
            .verify_password(password.to_string(), stored_hash)
            .await?;

        match account {
            Some(account) if password_matches => Ok(account.username),
            _ => {
                tracing::warn!(username = %username, "Rejected login attempt");
                Err(AccountError::InvalidCredentials)
            }
        }
    }
}
