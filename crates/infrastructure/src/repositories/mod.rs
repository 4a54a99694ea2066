pub mod sqlite_account_repository;
pub mod sqlite_customer_repository;
pub mod sqlite_order_repository;
pub mod sqlite_product_repository;
pub mod sqlite_stats_repository;

pub use sqlite_account_repository::SqliteAccountRepository;
pub use sqlite_customer_repository::SqliteCustomerRepository;
pub use sqlite_order_repository::SqliteOrderRepository;
pub use sqlite_product_repository::SqliteProductRepository;
pub use sqlite_stats_repository::SqliteStatsRepository;
