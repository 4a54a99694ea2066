use crate::entities::{CategoryStat, InventoryCounts, OrderStatusStat};
use crate::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn counts(&self, low_stock_threshold: i64) -> Result<InventoryCounts, DomainError>;
    async fn categories(&self) -> Result<Vec<CategoryStat>, DomainError>;
    async fn order_statuses(&self) -> Result<Vec<OrderStatusStat>, DomainError>;
}
