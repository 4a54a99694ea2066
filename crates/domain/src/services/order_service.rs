use crate::entities::{NewOrder, Order, OrderInput, OrderRequest};
use crate::errors::DomainError;
use crate::filters::OrderFilter;
use crate::repositories::{CustomerRepository, OrderRepository, ProductRepository};
use std::sync::Arc;
use tracing::{debug, info};

const NOT_FOUND: &str = "Order not found";

/// Order operations. Every write prices the order from the product's
/// current price before touching the orders table.
pub struct OrderService {
    order_repository: Arc<dyn OrderRepository>,
    product_repository: Arc<dyn ProductRepository>,
    customer_repository: Arc<dyn CustomerRepository>,
}

impl OrderService {
    pub fn new(
        order_repository: Arc<dyn OrderRepository>,
        product_repository: Arc<dyn ProductRepository>,
        customer_repository: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            order_repository,
            product_repository,
            customer_repository,
        }
    }

    pub async fn list(&self, filter: &OrderFilter) -> Result<Vec<Order>, DomainError> {
        self.order_repository.find_all(filter).await
    }

    pub async fn get(&self, id: i64) -> Result<Order, DomainError> {
        self.order_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))
    }

    pub async fn create(&self, input: OrderInput) -> Result<Order, DomainError> {
        let order = self.price(input.validate()?).await?;
        let saved = self.order_repository.save(&order).await?;
        info!(
            order_id = saved.id,
            total_amount = saved.total_amount,
            "order created"
        );
        Ok(saved)
    }

    /// Full replace; the total is recomputed against the product named in
    /// the new body.
    pub async fn update(&self, id: i64, input: OrderInput) -> Result<Order, DomainError> {
        let order = self.price(input.validate()?).await?;
        self.order_repository
            .update(id, &order)
            .await?
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.order_repository.delete(id).await? {
            return Err(DomainError::not_found(NOT_FOUND));
        }
        info!(order_id = id, "order deleted");
        Ok(())
    }

    /// Looks up the referenced rows and derives the total from the product.
    async fn price(&self, request: OrderRequest) -> Result<NewOrder, DomainError> {
        let product = self
            .product_repository
            .find_by_id(request.product_id)
            .await?
            .ok_or_else(|| DomainError::ReferenceNotFound("Product not found".to_string()))?;

        if self
            .customer_repository
            .find_by_id(request.customer_id)
            .await?
            .is_none()
        {
            return Err(DomainError::ReferenceNotFound(
                "Customer not found".to_string(),
            ));
        }

        debug!(
            product_id = product.id,
            unit_price = product.price,
            quantity = request.quantity,
            "pricing order"
        );
        Ok(request.price_with(product.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::OrderStatus;
    use crate::services::test_support::FakeStore;
    use serde_json::json;

    fn input(body: serde_json::Value) -> OrderInput {
        serde_json::from_value(body).unwrap()
    }

    fn service(store: &Arc<FakeStore>) -> OrderService {
        OrderService::new(store.clone(), store.clone(), store.clone())
    }

    #[tokio::test]
    async fn create_derives_total_and_joins_names() {
        let store = Arc::new(FakeStore::default());
        let customer = store.add_customer("John Doe", "john@example.com");
        let product = store.add_product("Wireless Mouse", 29.99);

        let order = service(&store)
            .create(input(json!({
                "customer_id": customer,
                "product_id": product,
                "quantity": 3,
                "total_amount": 1.0
            })))
            .await
            .unwrap();

        assert_eq!(order.total_amount, 89.97);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.customer_name.as_deref(), Some("John Doe"));
        assert_eq!(order.product_name.as_deref(), Some("Wireless Mouse"));
    }

    #[tokio::test]
    async fn update_reprices_against_the_new_product() {
        let store = Arc::new(FakeStore::default());
        let customer = store.add_customer("Jane Smith", "jane@example.com");
        let mouse = store.add_product("Wireless Mouse", 29.99);
        let keyboard = store.add_product("Mechanical Keyboard", 149.99);
        let service = service(&store);

        let order = service
            .create(input(json!({"customer_id": customer, "product_id": mouse, "quantity": 2})))
            .await
            .unwrap();
        assert_eq!(order.total_amount, 59.98);

        let updated = service
            .update(
                order.id,
                input(json!({
                    "customer_id": customer,
                    "product_id": keyboard,
                    "quantity": 2,
                    "status": "shipped"
                })),
            )
            .await
            .unwrap();
        assert_eq!(updated.total_amount, 299.98);
        assert_eq!(updated.status, OrderStatus::Shipped);
        assert_eq!(updated.product_name.as_deref(), Some("Mechanical Keyboard"));
    }

    #[tokio::test]
    async fn missing_product_fails_before_any_write() {
        let store = Arc::new(FakeStore::default());
        let customer = store.add_customer("Bob Johnson", "bob@example.com");

        let err = service(&store)
            .create(input(json!({"customer_id": customer, "product_id": 999, "quantity": 1})))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::ReferenceNotFound("Product not found".to_string()));
        assert_eq!(store.order_count(), 0);
    }

    #[tokio::test]
    async fn missing_customer_fails_before_any_write() {
        let store = Arc::new(FakeStore::default());
        let product = store.add_product("Pen Pack", 9.99);

        let err = service(&store)
            .create(input(json!({"customer_id": 999, "product_id": product, "quantity": 1})))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::ReferenceNotFound("Customer not found".to_string()));
        assert_eq!(store.order_count(), 0);
    }

    #[tokio::test]
    async fn updating_or_deleting_unknown_order_is_not_found() {
        let store = Arc::new(FakeStore::default());
        let customer = store.add_customer("Alice Brown", "alice@example.com");
        let product = store.add_product("Notebook Set", 19.99);
        let service = service(&store);

        let err = service
            .update(
                404,
                input(json!({"customer_id": customer, "product_id": product, "quantity": 1})),
            )
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound(NOT_FOUND.to_string()));
        assert_eq!(
            service.delete(404).await,
            Err(DomainError::NotFound(NOT_FOUND.to_string()))
        );
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let store = Arc::new(FakeStore::default());
        let customer = store.add_customer("Charlie Wilson", "charlie@example.com");
        let product = store.add_product("Webcam HD", 79.99);
        let service = service(&store);

        for status in ["pending", "completed", "completed"] {
            service
                .create(input(json!({
                    "customer_id": customer,
                    "product_id": product,
                    "quantity": 1,
                    "status": status
                })))
                .await
                .unwrap();
        }

        let completed = service
            .list(&OrderFilter::parse(Some("completed".to_string())).unwrap())
            .await
            .unwrap();
        assert_eq!(completed.len(), 2);
        assert!(completed.iter().all(|o| o.status == OrderStatus::Completed));
    }
}
