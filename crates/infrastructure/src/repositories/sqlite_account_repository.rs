use super::sqlite_customer_repository::DUPLICATE_EMAIL;
use crate::database::errors::{repository_error, write_error};
use crate::database::SqlitePool;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use domain::{Account, AccountCredentials, AccountRepository, DomainError, NewAccount};

const ACCOUNT_COLUMNS: &str =
    "SELECT id, email, first_name, last_name, created_at, password_hash FROM customers";

#[derive(sqlx::FromRow)]
struct AccountModel {
    id: i64,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
    created_at: NaiveDateTime,
    password_hash: Option<String>,
}

impl From<AccountModel> for AccountCredentials {
    fn from(model: AccountModel) -> Self {
        AccountCredentials {
            account: Account {
                id: model.id,
                email: model.email,
                first_name: model.first_name,
                last_name: model.last_name,
                created_at: model.created_at,
            },
            password_hash: model.password_hash,
        }
    }
}

/// Accounts live in the customers table; rows with a password hash can
/// sign in.
pub struct SqliteAccountRepository {
    pool: SqlitePool,
}

impl SqliteAccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountCredentials>, DomainError> {
        let row = sqlx::query_as::<_, AccountModel>(&format!("{} WHERE email = ?", ACCOUNT_COLUMNS))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query_as::<_, AccountModel>(&format!("{} WHERE id = ?", ACCOUNT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(row.map(|model| AccountCredentials::from(model).account))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(count > 0)
    }

    async fn create(&self, account: &NewAccount) -> Result<Account, DomainError> {
        let result = sqlx::query(
            "INSERT INTO customers (name, email, password_hash, first_name, last_name)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            write_error(e, DUPLICATE_EMAIL, || {
                DomainError::ValidationError("Account violates a constraint".to_string())
            })
        })?;

        self.find_by_id(result.last_insert_rowid())
            .await?
            .ok_or_else(|| DomainError::RepositoryError("Inserted account not found".to_string()))
    }
}
