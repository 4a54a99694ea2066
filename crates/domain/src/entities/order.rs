use crate::errors::DomainError;
use crate::validation::{non_blank, parse_integer, round_currency};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "shipped" => Ok(OrderStatus::Shipped),
            "completed" => Ok(OrderStatus::Completed),
            other => Err(DomainError::ValidationError(format!(
                "Invalid status '{}': expected pending, shipped or completed",
                other
            ))),
        }
    }
}

/// An order row joined with the display names of its customer and product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub customer_name: Option<String>,
    pub product_name: Option<String>,
}

/// Raw order body. `total_amount` is accepted only so it can be discarded
/// explicitly; the stored total is always derived from the product price.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderInput {
    pub customer_id: Option<Value>,
    pub product_id: Option<Value>,
    pub quantity: Option<Value>,
    pub status: Option<String>,
    pub total_amount: Option<Value>,
}

/// A validated order that has not been priced yet.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub customer_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub status: OrderStatus,
    client_total: Option<Value>,
}

/// A priced order ready to be written. Only [`OrderRequest::price_with`]
/// can build one, so `total_amount` is always `unit_price * quantity`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub status: OrderStatus,
    total_amount: f64,
}

impl NewOrder {
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }
}

pub fn derive_total_amount(unit_price: f64, quantity: i64) -> f64 {
    round_currency(unit_price * quantity as f64)
}

impl OrderInput {
    pub fn validate(self) -> Result<OrderRequest, DomainError> {
        let present = |v: Option<Value>| v.filter(|v| !v.is_null());
        let (Some(customer_id), Some(product_id), Some(quantity)) = (
            present(self.customer_id),
            present(self.product_id),
            present(self.quantity),
        ) else {
            return Err(DomainError::validation(
                "Customer, product, and quantity are required",
            ));
        };

        let customer_id = parse_integer(&customer_id)
            .filter(|id| *id > 0)
            .ok_or_else(|| DomainError::validation("customer_id must be a positive integer"))?;
        let product_id = parse_integer(&product_id)
            .filter(|id| *id > 0)
            .ok_or_else(|| DomainError::validation("product_id must be a positive integer"))?;
        let quantity = parse_integer(&quantity)
            .filter(|q| *q > 0)
            .ok_or_else(|| DomainError::validation("Quantity must be a positive integer"))?;

        let status = match non_blank(self.status) {
            Some(raw) => raw.parse()?,
            None => OrderStatus::default(),
        };

        Ok(OrderRequest {
            customer_id,
            product_id,
            quantity,
            status,
            client_total: present(self.total_amount),
        })
    }
}

impl OrderRequest {
    pub fn price_with(self, unit_price: f64) -> NewOrder {
        let total_amount = derive_total_amount(unit_price, self.quantity);
        if let Some(client_total) = &self.client_total {
            tracing::debug!(
                client_total = %client_total,
                derived_total = total_amount,
                "ignoring client-supplied total_amount"
            );
        }

        NewOrder {
            customer_id: self.customer_id,
            product_id: self.product_id,
            quantity: self.quantity,
            status: self.status,
            total_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(body: Value) -> OrderInput {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn total_is_derived_and_client_total_ignored() {
        let order = input(json!({
            "customer_id": 1,
            "product_id": 2,
            "quantity": 3,
            "total_amount": 0.01
        }))
        .validate()
        .unwrap()
        .price_with(29.99);

        assert_eq!(order.total_amount(), 89.97);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn status_is_parsed_case_insensitively() {
        let order = input(json!({"customer_id": "1", "product_id": "2", "quantity": "1", "status": "Shipped"}))
            .validate()
            .unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
    }

    #[test]
    fn unknown_status_is_a_validation_error() {
        assert!(matches!(
            input(json!({"customer_id": 1, "product_id": 2, "quantity": 1, "status": "lost"})).validate(),
            Err(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn quantity_must_be_positive() {
        for quantity in [json!(0), json!(-2), json!(1.5), json!("many")] {
            let err = input(json!({"customer_id": 1, "product_id": 2, "quantity": quantity}))
                .validate()
                .unwrap_err();
            assert_eq!(err.to_string(), "Quantity must be a positive integer");
        }
    }

    #[test]
    fn required_fields() {
        let err = input(json!({"customer_id": 1, "quantity": 1})).validate().unwrap_err();
        assert_eq!(err.to_string(), "Customer, product, and quantity are required");
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [OrderStatus::Pending, OrderStatus::Shipped, OrderStatus::Completed] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }
}
