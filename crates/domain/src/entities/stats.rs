use serde::{Deserialize, Serialize};

/// Products with less stock than this count as low on stock.
pub const LOW_STOCK_THRESHOLD: i64 = 30;

/// Raw counters as read from the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryCounts {
    pub total_products: i64,
    pub total_customers: i64,
    pub total_orders: i64,
    pub completed_revenue: f64,
    pub low_stock_products: i64,
    pub pending_orders: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: i64,
    pub total_customers: i64,
    pub total_orders: i64,
    /// Revenue of completed orders, formatted with two decimals.
    pub total_revenue: String,
    pub low_stock_products: i64,
    pub pending_orders: i64,
}

impl From<InventoryCounts> for DashboardStats {
    fn from(counts: InventoryCounts) -> Self {
        Self {
            total_products: counts.total_products,
            total_customers: counts.total_customers,
            total_orders: counts.total_orders,
            total_revenue: format!("{:.2}", counts.completed_revenue),
            low_stock_products: counts.low_stock_products,
            pending_orders: counts.pending_orders,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category: String,
    pub count: i64,
    pub total_stock: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusStat {
    pub status: String,
    pub count: i64,
    pub total: f64,
}
