use crate::errors::DomainError;
use crate::validation::{non_blank, parse_integer, parse_number};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Raw product body as sent by clients, for both create and full update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Value>,
    pub stock: Option<Value>,
}

/// A product that passed validation and is ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: i64,
}

impl ProductInput {
    pub fn validate(self) -> Result<NewProduct, DomainError> {
        let name = non_blank(self.name);
        let category = non_blank(self.category);
        let price = self.price.filter(|p| !p.is_null());

        let (Some(name), Some(category), Some(price)) = (name, category, price) else {
            return Err(DomainError::validation(
                "Name, category, and price are required",
            ));
        };

        let price = parse_number(&price)
            .filter(|p| *p >= 0.0)
            .ok_or_else(|| DomainError::validation("Price must be a non-negative number"))?;

        let stock = match self.stock.filter(|s| !s.is_null()) {
            None => 0,
            Some(raw) => parse_integer(&raw)
                .filter(|s| *s >= 0)
                .ok_or_else(|| DomainError::validation("Stock must be a non-negative integer"))?,
        };

        Ok(NewProduct {
            name,
            category,
            price,
            stock,
        })
    }
}
