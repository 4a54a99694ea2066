use crate::entities::{Customer, NewCustomer};
use crate::errors::DomainError;
use crate::filters::CustomerFilter;
use async_trait::async_trait;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self, filter: &CustomerFilter) -> Result<Vec<Customer>, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError>;
    /// Fails with `DomainError::Conflict` when the email is taken.
    async fn save(&self, customer: &NewCustomer) -> Result<Customer, DomainError>;
    async fn update(&self, id: i64, customer: &NewCustomer) -> Result<Option<Customer>, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
