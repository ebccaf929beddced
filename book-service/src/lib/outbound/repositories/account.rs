use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::Username;
use crate::account::ports::AccountRepository;

/// Process-lifetime account storage.
///
/// Accounts live in a `HashMap` keyed by username behind a `RwLock`. Data is
/// lost when the repository is dropped.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<Username, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&account.username) {
            return Err(AccountError::AlreadyExists(account.username.to_string()));
        }

        accounts.insert(account.username.clone(), account.clone());
        Ok(account)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, AccountError> {
        Ok(self.accounts.read().await.get(username).cloned())
    }
}
