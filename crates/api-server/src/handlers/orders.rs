use super::ApiResult;
use crate::extract::{Json, Path, Query};
use crate::response::Envelope;
use crate::AppState;
use axum::extract::State;
use domain::{Order, OrderFilter, OrderInput};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct OrderQuery {
    status: Option<String>,
}

pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> ApiResult<Envelope<Vec<Order>>> {
    let filter = OrderFilter::parse(query.status)?;
    Ok(Envelope::data(state.app.order_service.list(&filter).await?))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Envelope<Order>> {
    Ok(Envelope::data(state.app.order_service.get(id).await?))
}

/// Any `total_amount` in the body is ignored; the total is derived from
/// the product's current price.
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<OrderInput>,
) -> ApiResult<Envelope<Order>> {
    Ok(Envelope::created(state.app.order_service.create(input).await?))
}

pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<OrderInput>,
) -> ApiResult<Envelope<Order>> {
    Ok(Envelope::data(state.app.order_service.update(id, input).await?))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Envelope<()>> {
    state.app.order_service.delete(id).await?;
    Ok(Envelope::message("Order deleted successfully"))
}
