// Database schema for the inventory dashboard
use super::errors::repository_error;
use domain::DomainError;
use sqlx::SqlitePool;

const CREATE_TABLES: [&str; 4] = [
    "CREATE TABLE IF NOT EXISTS products (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        name        TEXT    NOT NULL,
        category    TEXT    NOT NULL,
        price       REAL    NOT NULL CHECK (price >= 0),
        stock       INTEGER NOT NULL DEFAULT 0 CHECK (stock >= 0),
        created_at  DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at  DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE IF NOT EXISTS customers (
        id             INTEGER PRIMARY KEY AUTOINCREMENT,
        name           TEXT NOT NULL,
        email          TEXT NOT NULL UNIQUE,
        phone          TEXT,
        address        TEXT,
        password_hash  TEXT,
        first_name     TEXT,
        last_name      TEXT,
        created_at     DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_id   INTEGER NOT NULL REFERENCES customers(id),
        product_id    INTEGER NOT NULL REFERENCES products(id),
        quantity      INTEGER NOT NULL DEFAULT 1 CHECK (quantity > 0),
        total_amount  REAL    NOT NULL CHECK (total_amount >= 0),
        status        TEXT    NOT NULL DEFAULT 'pending'
                      CHECK (status IN ('pending', 'shipped', 'completed')),
        created_at    DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE INDEX IF NOT EXISTS idx_orders_status ON orders(status)",
];

const SAMPLE_PRODUCTS: [(&str, &str, f64, i64); 10] = [
    ("Laptop Pro 15\"", "Electronics", 1299.99, 50),
    ("Wireless Mouse", "Electronics", 29.99, 200),
    ("Mechanical Keyboard", "Electronics", 149.99, 75),
    ("Monitor 27\" 4K", "Electronics", 499.99, 30),
    ("USB-C Hub", "Accessories", 49.99, 150),
    ("Webcam HD", "Electronics", 79.99, 100),
    ("Desk Chair", "Furniture", 299.99, 25),
    ("Standing Desk", "Furniture", 599.99, 15),
    ("Notebook Set", "Office", 19.99, 500),
    ("Pen Pack", "Office", 9.99, 1000),
];

const SAMPLE_CUSTOMERS: [(&str, &str, &str, &str); 5] = [
    ("John Doe", "john@example.com", "555-0101", "123 Main St, NYC"),
    ("Jane Smith", "jane@example.com", "555-0102", "456 Oak Ave, LA"),
    ("Bob Johnson", "bob@example.com", "555-0103", "789 Pine Rd, Chicago"),
    ("Alice Brown", "alice@example.com", "555-0104", "321 Elm St, Houston"),
    ("Charlie Wilson", "charlie@example.com", "555-0105", "654 Maple Dr, Phoenix"),
];

// (customer, product, quantity, total, status); ids refer to the rows above.
const SAMPLE_ORDERS: [(i64, i64, i64, f64, &str); 10] = [
    (1, 1, 1, 1299.99, "completed"),
    (1, 2, 2, 59.98, "completed"),
    (2, 3, 1, 149.99, "shipped"),
    (2, 4, 1, 499.99, "pending"),
    (3, 5, 3, 149.97, "completed"),
    (3, 7, 1, 299.99, "shipped"),
    (4, 8, 1, 599.99, "pending"),
    (4, 9, 5, 99.95, "completed"),
    (5, 6, 2, 159.98, "shipped"),
    (5, 10, 10, 99.90, "completed"),
];

pub async fn create_schema(pool: &SqlitePool) -> Result<(), DomainError> {
    for statement in CREATE_TABLES {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(repository_error)?;
    }
    Ok(())
}

async fn is_empty(pool: &SqlitePool, table: &str) -> Result<bool, DomainError> {
    // `table` is always one of the constant names below.
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .map_err(repository_error)?;
    Ok(count == 0)
}

/// Seeds each empty table with fixed sample rows. Orders are only seeded
/// when products and customers were seeded in the same run, so the fixed
/// foreign keys point at the sample rows.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<(), DomainError> {
    let seed_products = is_empty(pool, "products").await?;
    let seed_customers = is_empty(pool, "customers").await?;
    let seed_orders = seed_products && seed_customers && is_empty(pool, "orders").await?;

    let mut tx = pool.begin().await.map_err(repository_error)?;

    if seed_products {
        for (name, category, price, stock) in SAMPLE_PRODUCTS {
            sqlx::query("INSERT INTO products (name, category, price, stock) VALUES (?, ?, ?, ?)")
                .bind(name)
                .bind(category)
                .bind(price)
                .bind(stock)
                .execute(&mut *tx)
                .await
                .map_err(repository_error)?;
        }
    }

    if seed_customers {
        for (name, email, phone, address) in SAMPLE_CUSTOMERS {
            sqlx::query("INSERT INTO customers (name, email, phone, address) VALUES (?, ?, ?, ?)")
                .bind(name)
                .bind(email)
                .bind(phone)
                .bind(address)
                .execute(&mut *tx)
                .await
                .map_err(repository_error)?;
        }
    }

    if seed_orders {
        for (customer_id, product_id, quantity, total_amount, status) in SAMPLE_ORDERS {
            sqlx::query(
                "INSERT INTO orders (customer_id, product_id, quantity, total_amount, status)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(customer_id)
            .bind(product_id)
            .bind(quantity)
            .bind(total_amount)
            .bind(status)
            .execute(&mut *tx)
            .await
            .map_err(repository_error)?;
        }
    }

    tx.commit().await.map_err(repository_error)?;

    if seed_products || seed_customers {
        tracing::info!(
            products = seed_products,
            customers = seed_customers,
            orders = seed_orders,
            "🌱 seeded sample data"
        );
    }
    Ok(())
}
