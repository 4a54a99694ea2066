use crate::entities::{CategoryStat, DashboardStats, OrderStatusStat, LOW_STOCK_THRESHOLD};
use crate::errors::DomainError;
use crate::repositories::StatsRepository;
use std::sync::Arc;

/// Read-only aggregates for the dashboard
pub struct StatsService {
    stats_repository: Arc<dyn StatsRepository>,
}

impl StatsService {
    pub fn new(stats_repository: Arc<dyn StatsRepository>) -> Self {
        Self { stats_repository }
    }

    pub async fn overview(&self) -> Result<DashboardStats, DomainError> {
        let counts = self.stats_repository.counts(LOW_STOCK_THRESHOLD).await?;
        Ok(counts.into())
    }

    pub async fn categories(&self) -> Result<Vec<CategoryStat>, DomainError> {
        self.stats_repository.categories().await
    }

    pub async fn order_statuses(&self) -> Result<Vec<OrderStatusStat>, DomainError> {
        self.stats_repository.order_statuses().await
    }
}
