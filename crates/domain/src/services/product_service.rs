use crate::entities::{Product, ProductInput};
use crate::errors::DomainError;
use crate::filters::ProductFilter;
use crate::repositories::ProductRepository;
use std::sync::Arc;
use tracing::{info, warn};

const NOT_FOUND: &str = "Product not found";

/// Product catalogue operations
pub struct ProductService {
    product_repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        self.product_repository.find_all(filter).await
    }

    pub async fn get(&self, id: i64) -> Result<Product, DomainError> {
        match self.product_repository.find_by_id(id).await? {
            Some(product) => Ok(product),
            None => {
                warn!(product_id = id, "product not found");
                Err(DomainError::not_found(NOT_FOUND))
            }
        }
    }

    pub async fn create(&self, input: ProductInput) -> Result<Product, DomainError> {
        let product = input.validate()?;
        let saved = self.product_repository.save(&product).await?;
        info!(product_id = saved.id, name = %saved.name, "product created");
        Ok(saved)
    }

    /// Full replace: every field must be resent.
    pub async fn update(&self, id: i64, input: ProductInput) -> Result<Product, DomainError> {
        let product = input.validate()?;
        self.product_repository
            .update(id, &product)
            .await?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.product_repository.delete(id).await? {
            return Err(DomainError::not_found(NOT_FOUND));
        }
        info!(product_id = id, "product deleted");
        Ok(())
    }
}
