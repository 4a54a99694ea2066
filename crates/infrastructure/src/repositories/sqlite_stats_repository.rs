use crate::database::errors::repository_error;
use crate::database::SqlitePool;
use async_trait::async_trait;
use domain::validation::round_currency;
use domain::{CategoryStat, DomainError, InventoryCounts, OrderStatusStat, StatsRepository};

#[derive(sqlx::FromRow)]
struct CountsModel {
    total_products: i64,
    total_customers: i64,
    total_orders: i64,
    completed_revenue: f64,
    low_stock_products: i64,
    pending_orders: i64,
}

#[derive(sqlx::FromRow)]
struct CategoryModel {
    category: String,
    count: i64,
    total_stock: i64,
}

#[derive(sqlx::FromRow)]
struct OrderStatusModel {
    status: String,
    count: i64,
    total: f64,
}

pub struct SqliteStatsRepository {
    pool: SqlitePool,
}

impl SqliteStatsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for SqliteStatsRepository {
    async fn counts(&self, low_stock_threshold: i64) -> Result<InventoryCounts, DomainError> {
        let row = sqlx::query_as::<_, CountsModel>(
            "SELECT
                (SELECT COUNT(*) FROM products) AS total_products,
                (SELECT COUNT(*) FROM customers) AS total_customers,
                (SELECT COUNT(*) FROM orders) AS total_orders,
                (SELECT COALESCE(SUM(total_amount), 0.0) FROM orders WHERE status = 'completed')
                    AS completed_revenue,
                (SELECT COUNT(*) FROM products WHERE stock < ?) AS low_stock_products,
                (SELECT COUNT(*) FROM orders WHERE status = 'pending') AS pending_orders",
        )
        .bind(low_stock_threshold)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(InventoryCounts {
            total_products: row.total_products,
            total_customers: row.total_customers,
            total_orders: row.total_orders,
            completed_revenue: round_currency(row.completed_revenue),
            low_stock_products: row.low_stock_products,
            pending_orders: row.pending_orders,
        })
    }

    async fn categories(&self) -> Result<Vec<CategoryStat>, DomainError> {
        let rows = sqlx::query_as::<_, CategoryModel>(
            "SELECT category, COUNT(*) AS count, COALESCE(SUM(stock), 0) AS total_stock
             FROM products GROUP BY category ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows
            .into_iter()
            .map(|row| CategoryStat {
                category: row.category,
                count: row.count,
                total_stock: row.total_stock,
            })
            .collect())
    }

    async fn order_statuses(&self) -> Result<Vec<OrderStatusStat>, DomainError> {
        let rows = sqlx::query_as::<_, OrderStatusModel>(
            "SELECT status, COUNT(*) AS count, COALESCE(SUM(total_amount), 0.0) AS total
             FROM orders GROUP BY status ORDER BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows
            .into_iter()
            .map(|row| OrderStatusStat {
                status: row.status,
                count: row.count,
                total: round_currency(row.total),
            })
            .collect())
    }
}
