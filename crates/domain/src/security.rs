//! Ports for password hashing and session credentials.

use crate::entities::Account;
use crate::errors::DomainError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Claims carried by a session credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: i64,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Checks `password` against `hash`. With no stored hash the check still
    /// runs against a decoy so a missing account costs the same as a wrong
    /// password, and the result is `false`.
    async fn verify(&self, password: &str, hash: Option<&str>) -> Result<bool, DomainError>;
}

pub trait SessionTokens: Send + Sync {
    fn issue(&self, account: &Account) -> Result<String, DomainError>;

    /// Fails with `DomainError::Unauthorized` for malformed, forged or
    /// expired credentials.
    fn verify(&self, token: &str) -> Result<SessionClaims, DomainError>;
}
