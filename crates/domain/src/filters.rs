//! Optional list filters parsed from query parameters.

use crate::entities::OrderStatus;
use crate::errors::DomainError;
use crate::validation::non_blank;

/// Product ordering. Anything outside the allow-list falls back to
/// newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    PriceAsc,
    PriceDesc,
    StockAsc,
    StockDesc,
    #[default]
    Newest,
}

impl ProductSort {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("price_asc") => ProductSort::PriceAsc,
            Some("price_desc") => ProductSort::PriceDesc,
            Some("stock_asc") => ProductSort::StockAsc,
            Some("stock_desc") => ProductSort::StockDesc,
            _ => ProductSort::Newest,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: ProductSort,
}

impl ProductFilter {
    pub fn new(search: Option<String>, category: Option<String>, sort: Option<String>) -> Self {
        Self {
            search: non_blank(search),
            category: non_blank(category),
            sort: ProductSort::parse(sort.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerFilter {
    pub search: Option<String>,
}

impl CustomerFilter {
    pub fn new(search: Option<String>) -> Self {
        Self {
            search: non_blank(search),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn parse(status: Option<String>) -> Result<Self, DomainError> {
        let status = non_blank(status)
            .map(|s| s.parse::<OrderStatus>())
            .transpose()?;
        Ok(Self { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_falls_back_to_newest() {
        assert_eq!(ProductSort::parse(Some("price_asc")), ProductSort::PriceAsc);
        assert_eq!(ProductSort::parse(Some("stock_desc")), ProductSort::StockDesc);
        assert_eq!(ProductSort::parse(Some("bogus")), ProductSort::Newest);
        assert_eq!(ProductSort::parse(Some("id; DROP TABLE products")), ProductSort::Newest);
        assert_eq!(ProductSort::parse(None), ProductSort::Newest);
    }

    #[test]
    fn empty_parameters_are_ignored() {
        let filter = ProductFilter::new(Some(String::new()), Some("  ".to_string()), None);
        assert_eq!(filter, ProductFilter::default());
        assert_eq!(OrderFilter::parse(Some(String::new())).unwrap(), OrderFilter::default());
    }

    #[test]
    fn order_status_filter_is_validated() {
        assert_eq!(
            OrderFilter::parse(Some("shipped".to_string())).unwrap().status,
            Some(OrderStatus::Shipped)
        );
        assert!(OrderFilter::parse(Some("returned".to_string())).is_err());
    }
}
