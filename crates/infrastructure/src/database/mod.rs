use domain::DomainError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

pub mod errors;
pub mod schema;

pub use sqlx::SqlitePool;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the SQLite database at `database_url`.
    /// `sqlite::memory:` gets a single long-lived connection so the data
    /// survives for the life of the pool.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DomainError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| DomainError::RepositoryError(format!("Invalid DATABASE_URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| DomainError::RepositoryError(format!("Failed to open database: {}", e)))?;

        Ok(Database { pool })
    }

    pub async fn in_memory() -> Result<Self, DomainError> {
        Self::connect("sqlite::memory:", 1).await
    }

    /// Create tables if missing, then optionally seed empty tables.
    pub async fn initialize(&self, seed_sample_data: bool) -> Result<(), DomainError> {
        schema::create_schema(&self.pool).await?;
        if seed_sample_data {
            schema::seed_sample_data(&self.pool).await?;
        }
        Ok(())
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
