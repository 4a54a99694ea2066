use crate::entities::{Customer, CustomerInput};
use crate::errors::DomainError;
use crate::filters::CustomerFilter;
use crate::repositories::CustomerRepository;
use std::sync::Arc;
use tracing::{info, warn};

const NOT_FOUND: &str = "Customer not found";

pub struct CustomerService {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repository }
    }

    pub async fn list(&self, filter: &CustomerFilter) -> Result<Vec<Customer>, DomainError> {
        self.customer_repository.find_all(filter).await
    }

    pub async fn get(&self, id: i64) -> Result<Customer, DomainError> {
        match self.customer_repository.find_by_id(id).await? {
            Some(customer) => Ok(customer),
            None => {
                warn!(customer_id = id, "customer not found");
                Err(DomainError::not_found(NOT_FOUND))
            }
        }
    }

    /// Duplicate emails surface as `DomainError::Conflict` from the store.
    pub async fn create(&self, input: CustomerInput) -> Result<Customer, DomainError> {
        let customer = input.validate()?;
        let saved = self.customer_repository.save(&customer).await?;
        info!(customer_id = saved.id, "customer created");
        Ok(saved)
    }

    pub async fn update(&self, id: i64, input: CustomerInput) -> Result<Customer, DomainError> {
        let customer = input.validate()?;
        self.customer_repository
            .update(id, &customer)
            .await?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.customer_repository.delete(id).await? {
            return Err(DomainError::not_found(NOT_FOUND));
        }
        info!(customer_id = id, "customer deleted");
        Ok(())
    }
}
