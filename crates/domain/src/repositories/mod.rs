pub mod account_repository;
pub mod customer_repository;
pub mod order_repository;
pub mod product_repository;
pub mod stats_repository;

pub use account_repository::AccountRepository;
pub use customer_repository::CustomerRepository;
pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;
pub use stats_repository::StatsRepository;
