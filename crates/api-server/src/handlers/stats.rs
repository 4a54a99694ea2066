use super::ApiResult;
use crate::response::Envelope;
use crate::AppState;
use axum::extract::State;
use domain::{CategoryStat, DashboardStats, OrderStatusStat};

pub async fn overview(State(state): State<AppState>) -> ApiResult<Envelope<DashboardStats>> {
    Ok(Envelope::data(state.app.stats_service.overview().await?))
}

pub async fn categories(State(state): State<AppState>) -> ApiResult<Envelope<Vec<CategoryStat>>> {
    Ok(Envelope::data(state.app.stats_service.categories().await?))
}

pub async fn order_statuses(
    State(state): State<AppState>,
) -> ApiResult<Envelope<Vec<OrderStatusStat>>> {
    Ok(Envelope::data(state.app.stats_service.order_statuses().await?))
}
