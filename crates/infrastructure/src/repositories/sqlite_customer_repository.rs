use crate::database::errors::{repository_error, write_error};
use crate::database::SqlitePool;
use crate::query_builder::{self, CUSTOMER_COLUMNS};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use domain::{Customer, CustomerFilter, CustomerRepository, DomainError, NewCustomer};

pub(crate) const DUPLICATE_EMAIL: &str = "Email already exists";

#[derive(sqlx::FromRow, Debug)]
struct CustomerModel {
    id: i64,
    name: String,
    email: String,
    phone: Option<String>,
    address: Option<String>,
    created_at: NaiveDateTime,
}

impl From<CustomerModel> for Customer {
    fn from(model: CustomerModel) -> Self {
        Customer {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            created_at: model.created_at,
        }
    }
}

pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn check_violation(err: sqlx::Error) -> DomainError {
        write_error(err, DUPLICATE_EMAIL, || {
            DomainError::ValidationError("Customer violates a constraint".to_string())
        })
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn find_all(&self, filter: &CustomerFilter) -> Result<Vec<Customer>, DomainError> {
        let mut query = query_builder::customers(filter);
        let rows = query
            .build_query_as::<CustomerModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        let row = sqlx::query_as::<_, CustomerModel>(&format!("{} WHERE id = ?", CUSTOMER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, customer: &NewCustomer) -> Result<Customer, DomainError> {
        let result = sqlx::query(
            "INSERT INTO customers (name, email, phone, address) VALUES (?, ?, ?, ?)",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.address)
        .execute(&self.pool)
        .await
        .map_err(Self::check_violation)?;

        self.find_by_id(result.last_insert_rowid())
            .await?
            .ok_or_else(|| DomainError::RepositoryError("Inserted customer not found".to_string()))
    }

    async fn update(&self, id: i64, customer: &NewCustomer) -> Result<Option<Customer>, DomainError> {
        let result = sqlx::query(
            "UPDATE customers SET name = ?, email = ?, phone = ?, address = ? WHERE id = ?",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.address)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(Self::check_violation)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                write_error(e, DUPLICATE_EMAIL, || {
                    DomainError::Conflict("Customer is referenced by existing orders".to_string())
                })
            })?;

        Ok(result.rows_affected() > 0)
    }
}
