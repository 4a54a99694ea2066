use crate::entities::{Account, AccountCredentials, NewAccount};
use crate::errors::DomainError;
use async_trait::async_trait;

/// Sign-in view over the customers table.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountCredentials>, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError>;
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError>;
    async fn create(&self, account: &NewAccount) -> Result<Account, DomainError>;
}
