pub mod auth_service;
pub mod customer_service;
pub mod order_service;
pub mod product_service;
pub mod stats_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth_service::AuthService;
pub use customer_service::CustomerService;
pub use order_service::OrderService;
pub use product_service::ProductService;
pub use stats_service::StatsService;
