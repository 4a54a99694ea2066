use crate::database::errors::{repository_error, write_error};
use crate::database::SqlitePool;
use crate::query_builder::{self, PRODUCT_COLUMNS};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use domain::{DomainError, NewProduct, Product, ProductFilter, ProductRepository};

// Database model - separate from domain entity
#[derive(sqlx::FromRow, Debug)]
struct ProductModel {
    id: i64,
    name: String,
    category: String,
    price: f64,
    stock: i64,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: model.id,
            name: model.name,
            category: model.category,
            price: model.price,
            stock: model.stock,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn check_violation(err: sqlx::Error) -> DomainError {
        write_error(err, "Product violates a unique constraint", || {
            DomainError::ValidationError("Product violates a constraint".to_string())
        })
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn find_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        let mut query = query_builder::products(filter);
        let rows = query
            .build_query_as::<ProductModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let row = sqlx::query_as::<_, ProductModel>(&format!("{} WHERE id = ?", PRODUCT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, product: &NewProduct) -> Result<Product, DomainError> {
        // Insert, then read the row back to pick up the generated columns
        let result = sqlx::query(
            "INSERT INTO products (name, category, price, stock) VALUES (?, ?, ?, ?)",
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.stock)
        .execute(&self.pool)
        .await
        .map_err(Self::check_violation)?;

        self.find_by_id(result.last_insert_rowid())
            .await?
            .ok_or_else(|| DomainError::RepositoryError("Inserted product not found".to_string()))
    }

    async fn update(&self, id: i64, product: &NewProduct) -> Result<Option<Product>, DomainError> {
        let result = sqlx::query(
            "UPDATE products
             SET name = ?, category = ?, price = ?, stock = ?, updated_at = CURRENT_TIMESTAMP
             WHERE id = ?",
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.stock)
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
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                write_error(e, "Product violates a unique constraint", || {
                    DomainError::Conflict("Product is referenced by existing orders".to_string())
                })
            })?;

        Ok(result.rows_affected() > 0)
    }
}
