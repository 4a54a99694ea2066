use crate::errors::DomainError;
use crate::validation::{is_valid_email, non_blank, normalize_email};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CustomerInput {
    pub fn validate(self) -> Result<NewCustomer, DomainError> {
        let (Some(name), Some(email)) = (non_blank(self.name), non_blank(self.email)) else {
            return Err(DomainError::validation("Name and email are required"));
        };

        let email = normalize_email(&email);
        if !is_valid_email(&email) {
            return Err(DomainError::validation("Invalid email format"));
        }

        Ok(NewCustomer {
            name,
            email,
            phone: non_blank(self.phone),
            address: non_blank(self.address),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized_and_blank_optionals_dropped() {
        let customer = CustomerInput {
            name: Some("Dana Scully".to_string()),
            email: Some("  Dana@FBI.gov ".to_string()),
            phone: Some("".to_string()),
            address: Some("Washington DC".to_string()),
        }
        .validate()
        .unwrap();

        assert_eq!(customer.email, "dana@fbi.gov");
        assert_eq!(customer.phone, None);
        assert_eq!(customer.address.as_deref(), Some("Washington DC"));
    }

    #[test]
    fn name_and_email_are_required() {
        let err = CustomerInput {
            name: Some("Nobody".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "Name and email are required");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let err = CustomerInput {
            name: Some("Nobody".to_string()),
            email: Some("nobody-at-example.com".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, DomainError::ValidationError("Invalid email format".to_string()));
    }
}
