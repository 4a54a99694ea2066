use config::Config;
use domain::*;
use infrastructure::*;
use std::sync::Arc;
use tracing::info;

/// Inventory application - wires the SQLite store and security adapters
/// into the domain services.
pub struct InventoryApp {
    pub product_service: ProductService,
    pub customer_service: CustomerService,
    pub order_service: OrderService,
    pub stats_service: StatsService,
    pub auth_service: AuthService,
    database: Database,
}

impl InventoryApp {
    /// Opens the configured database, creates the schema and seeds it when
    /// enabled.
    pub async fn new(config: &Config) -> Result<Self, DomainError> {
        let database =
            Database::connect(&config.database_url, config.database_max_connections).await?;
        database.initialize(config.seed_sample_data).await?;
        info!("💾 database ready");

        Self::from_database(
            database,
            &config.jwt_secret,
            config.token_ttl_hours,
            config.bcrypt_cost,
        )
    }

    /// Builds the services over an already initialized database.
    pub fn from_database(
        database: Database,
        jwt_secret: &str,
        token_ttl_hours: i64,
        bcrypt_cost: u32,
    ) -> Result<Self, DomainError> {
        let pool = database.get_pool().clone();

        // Infrastructure adapters
        let product_repository: Arc<dyn ProductRepository> =
            Arc::new(SqliteProductRepository::new(pool.clone()));
        let customer_repository: Arc<dyn CustomerRepository> =
            Arc::new(SqliteCustomerRepository::new(pool.clone()));
        let order_repository: Arc<dyn OrderRepository> =
            Arc::new(SqliteOrderRepository::new(pool.clone()));
        let stats_repository: Arc<dyn StatsRepository> =
            Arc::new(SqliteStatsRepository::new(pool.clone()));
        let account_repository: Arc<dyn AccountRepository> =
            Arc::new(SqliteAccountRepository::new(pool));
        let password_hasher: Arc<dyn PasswordHasher> =
            Arc::new(BcryptPasswordHasher::new(bcrypt_cost)?);
        let session_tokens: Arc<dyn SessionTokens> =
            Arc::new(HmacSessionTokens::new(jwt_secret, token_ttl_hours)?);

        // Domain services
        let order_service = OrderService::new(
            order_repository,
            product_repository.clone(),
            customer_repository.clone(),
        );

        Ok(Self {
            product_service: ProductService::new(product_repository),
            customer_service: CustomerService::new(customer_repository),
            order_service,
            stats_service: StatsService::new(stats_repository),
            auth_service: AuthService::new(account_repository, password_hasher, session_tokens),
            database,
        })
    }

    pub async fn shutdown(&self) {
        self.database.close().await;
        info!("💾 database connections closed");
    }
}
