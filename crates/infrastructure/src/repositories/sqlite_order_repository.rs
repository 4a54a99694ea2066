use crate::database::errors::{repository_error, write_error};
use crate::database::SqlitePool;
use crate::query_builder::{self, ORDER_COLUMNS};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use domain::{DomainError, NewOrder, Order, OrderFilter, OrderRepository, OrderStatus};

#[derive(sqlx::FromRow, Debug)]
struct OrderModel {
    id: i64,
    customer_id: i64,
    product_id: i64,
    quantity: i64,
    total_amount: f64,
    status: String,
    created_at: NaiveDateTime,
    customer_name: Option<String>,
    product_name: Option<String>,
}

impl TryFrom<OrderModel> for Order {
    type Error = DomainError;

    fn try_from(model: OrderModel) -> Result<Self, Self::Error> {
        let status: OrderStatus = model.status.parse().map_err(|_| {
            DomainError::RepositoryError(format!(
                "Order {} has unknown status '{}'",
                model.id, model.status
            ))
        })?;

        Ok(Order {
            id: model.id,
            customer_id: model.customer_id,
            product_id: model.product_id,
            quantity: model.quantity,
            total_amount: model.total_amount,
            status,
            created_at: model.created_at,
            customer_name: model.customer_name,
            product_name: model.product_name,
        })
    }
}

pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn check_violation(err: sqlx::Error) -> DomainError {
        // The service checks both references first; this covers a row
        // deleted in between.
        write_error(err, "Order violates a unique constraint", || {
            DomainError::ReferenceNotFound("Referenced customer or product not found".to_string())
        })
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn find_all(&self, filter: &OrderFilter) -> Result<Vec<Order>, DomainError> {
        let mut query = query_builder::orders(filter);
        let rows = query
            .build_query_as::<OrderModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        rows.into_iter().map(Order::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let row = sqlx::query_as::<_, OrderModel>(&format!("{} WHERE o.id = ?", ORDER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        row.map(Order::try_from).transpose()
    }

    async fn save(&self, order: &NewOrder) -> Result<Order, DomainError> {
        let result = sqlx::query(
            "INSERT INTO orders (customer_id, product_id, quantity, total_amount, status)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(order.customer_id)
        .bind(order.product_id)
        .bind(order.quantity)
        .bind(order.total_amount())
        .bind(order.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(Self::check_violation)?;

        self.find_by_id(result.last_insert_rowid())
            .await?
            .ok_or_else(|| DomainError::RepositoryError("Inserted order not found".to_string()))
    }

    async fn update(&self, id: i64, order: &NewOrder) -> Result<Option<Order>, DomainError> {
        let result = sqlx::query(
            "UPDATE orders
             SET customer_id = ?, product_id = ?, quantity = ?, total_amount = ?, status = ?
             WHERE id = ?",
        )
        .bind(order.customer_id)
        .bind(order.product_id)
        .bind(order.quantity)
        .bind(order.total_amount())
        .bind(order.status.as_str())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(Self::check_violation)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }
}
