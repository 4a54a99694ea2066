//! HTTP surface of the inventory dashboard.

use application::InventoryApp;
use axum::routing::{get, post};
use axum::Router;
use domain::DomainError;
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;

use error::ApiError;
use handlers::{auth, customers, health, orders, products, stats};

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<InventoryApp>,
}

pub fn router(app: Arc<InventoryApp>) -> Router {
    let state = AppState { app };

    Router::new()
        // Dashboard aggregates
        .route("/api/stats", get(stats::overview))
        .route("/api/stats/categories", get(stats::categories))
        .route("/api/stats/orders", get(stats::order_statuses))
        // Products
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        // Customers
        .route(
            "/api/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/api/customers/:id",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        // Orders
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route(
            "/api/orders/:id",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        )
        // Customer accounts
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        // Health check
        .route("/health", get(health::health_check))
        .fallback(endpoint_not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn endpoint_not_found() -> ApiError {
    ApiError(DomainError::not_found("Endpoint not found"))
}

/// Binds `address` and serves until `shutdown` resolves.
pub async fn serve(
    app: Arc<InventoryApp>,
    address: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("🌐 API Server listening on http://{}", address);
    info!("📖 API Documentation:");
    info!("   GET  /api/stats[/categories|/orders] - Dashboard aggregates");
    info!("   GET|POST /api/products               - List (search, category, sort) / create");
    info!("   GET|PUT|DELETE /api/products/:id     - Product by id");
    info!("   GET|POST /api/customers              - List (search) / create");
    info!("   GET|PUT|DELETE /api/customers/:id    - Customer by id");
    info!("   GET|POST /api/orders                 - List (status) / create");
    info!("   GET|PUT|DELETE /api/orders/:id       - Order by id");
    info!("   POST /api/auth/register | /login     - Customer accounts");
    info!("   GET  /api/auth/me                    - Signed-in customer");
    info!("   GET  /health                         - Health check");

    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
