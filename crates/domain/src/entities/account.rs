use crate::errors::DomainError;
use crate::validation::{is_valid_email, non_blank, normalize_email, MIN_PASSWORD_LEN};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Role claim carried by every session credential issued to a customer.
pub const CUSTOMER_ROLE: &str = "customer";

/// Public profile of a customer that can sign in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: NaiveDateTime,
}

/// An account together with its stored password hash. Rows created through
/// the plain customer endpoints have no hash and can never sign in.
#[derive(Debug, Clone)]
pub struct AccountCredentials {
    pub account: Account,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterInput {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated registration; the password is still plaintext here and is
/// hashed by the auth service before anything is persisted.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub customer: Account,
    pub token: String,
}

impl RegisterInput {
    pub fn validate(self) -> Result<Registration, DomainError> {
        let password = self.password.filter(|p| !p.is_empty());
        let (Some(email), Some(password), Some(first_name), Some(last_name)) = (
            non_blank(self.email),
            password,
            non_blank(self.first_name),
            non_blank(self.last_name),
        ) else {
            return Err(DomainError::validation(
                "All fields are required: email, password, first_name, last_name",
            ));
        };

        let email = normalize_email(&email);
        if !is_valid_email(&email) {
            return Err(DomainError::validation("Invalid email format"));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::ValidationError(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            )));
        }

        Ok(Registration {
            email,
            password,
            first_name,
            last_name,
        })
    }
}

impl Registration {
    pub fn into_account(self, password_hash: String) -> NewAccount {
        NewAccount {
            name: format!("{} {}", self.first_name, self.last_name),
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            password_hash,
        }
    }
}

impl LoginInput {
    /// Returns the normalized email and the password.
    pub fn validate(self) -> Result<(String, String), DomainError> {
        match (non_blank(self.email), self.password.filter(|p| !p.is_empty())) {
            (Some(email), Some(password)) => Ok((normalize_email(&email), password)),
            _ => Err(DomainError::validation("Email and password are required")),
        }
    }
}
