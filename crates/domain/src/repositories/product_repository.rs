use crate::entities::{NewProduct, Product};
use crate::errors::DomainError;
use crate::filters::ProductFilter;
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;
    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError>;
    /// Replaces every column of the row; `None` when no row has this id.
    async fn update(&self, id: i64, product: &NewProduct) -> Result<Option<Product>, DomainError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
