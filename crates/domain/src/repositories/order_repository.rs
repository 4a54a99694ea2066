use crate::entities::{NewOrder, Order};
use crate::errors::DomainError;
use crate::filters::OrderFilter;
use async_trait::async_trait;

/// Every read returns orders joined with customer and product names.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_all(&self, filter: &OrderFilter) -> Result<Vec<Order>, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError>;
    async fn save(&self, order: &NewOrder) -> Result<Order, DomainError>;
    async fn update(&self, id: i64, order: &NewOrder) -> Result<Option<Order>, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
