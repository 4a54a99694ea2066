use super::ApiResult;
use crate::extract::{Json, Path, Query};
use crate::response::Envelope;
use crate::AppState;
use axum::extract::State;
use domain::{Product, ProductFilter, ProductInput};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    search: Option<String>,
    category: Option<String>,
    sort: Option<String>,
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> ApiResult<Envelope<Vec<Product>>> {
    let filter = ProductFilter::new(query.search, query.category, query.sort);
    let products = state.app.product_service.list(&filter).await?;
    Ok(Envelope::data(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Envelope<Product>> {
    Ok(Envelope::data(state.app.product_service.get(id).await?))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> ApiResult<Envelope<Product>> {
    Ok(Envelope::created(state.app.product_service.create(input).await?))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ProductInput>,
) -> ApiResult<Envelope<Product>> {
    Ok(Envelope::data(state.app.product_service.update(id, input).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Envelope<()>> {
    state.app.product_service.delete(id).await?;
    Ok(Envelope::message("Product deleted successfully"))
}
