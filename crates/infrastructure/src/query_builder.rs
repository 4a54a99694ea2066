//! Read queries built from optional filters.
//!
//! Client text only ever reaches SQLite through `push_bind`; the SQL string
//! itself is assembled from constants.

use domain::{CustomerFilter, OrderFilter, ProductFilter, ProductSort};
use sqlx::{QueryBuilder, Sqlite};

pub const PRODUCT_COLUMNS: &str =
    "SELECT id, name, category, price, stock, created_at, updated_at FROM products";

pub const CUSTOMER_COLUMNS: &str =
    "SELECT id, name, email, phone, address, created_at FROM customers";

pub const ORDER_COLUMNS: &str = "SELECT o.id, o.customer_id, o.product_id, o.quantity, \
     o.total_amount, o.status, o.created_at, \
     c.name AS customer_name, p.name AS product_name \
     FROM orders o \
     LEFT JOIN customers c ON o.customer_id = c.id \
     LEFT JOIN products p ON o.product_id = p.id";

/// `%text%` with LIKE wildcards in `text` escaped, for use with `ESCAPE '\'`.
pub fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn order_by(sort: ProductSort) -> &'static str {
    match sort {
        ProductSort::PriceAsc => " ORDER BY price ASC, id DESC",
        ProductSort::PriceDesc => " ORDER BY price DESC, id DESC",
        ProductSort::StockAsc => " ORDER BY stock ASC, id DESC",
        ProductSort::StockDesc => " ORDER BY stock DESC, id DESC",
        ProductSort::Newest => " ORDER BY id DESC",
    }
}

pub fn products(filter: &ProductFilter) -> QueryBuilder<'static, Sqlite> {
    let mut query = QueryBuilder::new(PRODUCT_COLUMNS);
    query.push(" WHERE 1=1");

    if let Some(search) = &filter.search {
        query.push(" AND LOWER(name) LIKE LOWER(");
        query.push_bind(like_pattern(search));
        query.push(") ESCAPE '\\'");
    }
    if let Some(category) = &filter.category {
        query.push(" AND category = ");
        query.push_bind(category.clone());
    }

    query.push(order_by(filter.sort));
    query
}

pub fn customers(filter: &CustomerFilter) -> QueryBuilder<'static, Sqlite> {
    let mut query = QueryBuilder::new(CUSTOMER_COLUMNS);

    if let Some(search) = &filter.search {
        let pattern = like_pattern(search);
        query.push(" WHERE LOWER(name) LIKE LOWER(");
        query.push_bind(pattern.clone());
        query.push(") ESCAPE '\\' OR LOWER(email) LIKE LOWER(");
        query.push_bind(pattern);
        query.push(") ESCAPE '\\'");
    }

    query.push(" ORDER BY id DESC");
    query
}

pub fn orders(filter: &OrderFilter) -> QueryBuilder<'static, Sqlite> {
    let mut query = QueryBuilder::new(ORDER_COLUMNS);

    if let Some(status) = filter.status {
        query.push(" WHERE o.status = ");
        query.push_bind(status.as_str());
    }

    query.push(" ORDER BY o.id DESC");
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::OrderStatus;

    #[test]
    fn client_text_never_enters_the_sql() {
        let filter = ProductFilter::new(
            Some("'; DROP TABLE products; --".to_string()),
            Some("Office' OR '1'='1".to_string()),
            Some("price_desc".to_string()),
        );
        let query = products(&filter);
        let sql = query.sql();

        assert!(!sql.contains("DROP"));
        assert!(!sql.contains("Office"));
        assert!(sql.contains("LOWER(name) LIKE LOWER(?)"));
        assert!(sql.contains("category = ?"));
        assert!(sql.ends_with("ORDER BY price DESC, id DESC"));
    }

    #[test]
    fn no_filters_orders_newest_first() {
        let query = products(&ProductFilter::default());
        assert_eq!(query.sql(), format!("{} WHERE 1=1 ORDER BY id DESC", PRODUCT_COLUMNS));
    }

    #[test]
    fn customer_search_matches_name_or_email() {
        let query = customers(&CustomerFilter::new(Some("doe".to_string())));
        let sql = query.sql();
        assert!(sql.contains("LOWER(name) LIKE LOWER(?)"));
        assert!(sql.contains("OR LOWER(email) LIKE LOWER(?)"));
    }

    #[test]
    fn order_status_is_bound() {
        let filter = OrderFilter {
            status: Some(OrderStatus::Shipped),
        };
        let query = orders(&filter);
        assert!(query.sql().contains("WHERE o.status = ?"));
        assert!(!query.sql().contains("shipped"));
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("mouse"), "%mouse%");
    }
}
