use super::ApiResult;
use crate::extract::{Json, Path, Query};
use crate::response::Envelope;
use crate::AppState;
use axum::extract::State;
use domain::{Customer, CustomerFilter, CustomerInput};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CustomerQuery {
    search: Option<String>,
}

pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<CustomerQuery>,
) -> ApiResult<Envelope<Vec<Customer>>> {
    let filter = CustomerFilter::new(query.search);
    Ok(Envelope::data(state.app.customer_service.list(&filter).await?))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Envelope<Customer>> {
    Ok(Envelope::data(state.app.customer_service.get(id).await?))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(input): Json<CustomerInput>,
) -> ApiResult<Envelope<Customer>> {
    Ok(Envelope::created(state.app.customer_service.create(input).await?))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<CustomerInput>,
) -> ApiResult<Envelope<Customer>> {
    Ok(Envelope::data(state.app.customer_service.update(id, input).await?))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Envelope<()>> {
    state.app.customer_service.delete(id).await?;
    Ok(Envelope::message("Customer deleted successfully"))
}
