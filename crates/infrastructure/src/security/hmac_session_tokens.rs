//! Signed session credentials.
//!
//! A token is `hex(claims_json) "." hex(hmac_sha256(secret, claims_json))`.
//! The signature is checked before the claims are parsed.

use chrono::{Duration, Utc};
use domain::{Account, DomainError, SessionClaims, SessionTokens, CUSTOMER_ROLE};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

fn invalid() -> DomainError {
    DomainError::Unauthorized("Invalid token".to_string())
}

pub struct HmacSessionTokens {
    secret: Vec<u8>,
    ttl: Duration,
}

impl HmacSessionTokens {
    pub fn new(secret: &str, ttl_hours: i64) -> Result<Self, DomainError> {
        let ttl = Duration::try_hours(ttl_hours)
            .filter(|ttl| *ttl > Duration::zero())
            .ok_or_else(|| {
                DomainError::RepositoryError(format!("Invalid token lifetime: {}h", ttl_hours))
            })?;
        Ok(Self {
            secret: secret.as_bytes().to_vec(),
            ttl,
        })
    }

    fn mac(&self) -> Result<HmacSha256, DomainError> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| DomainError::RepositoryError(format!("Invalid signing key: {}", e)))
    }

    /// Encodes and signs arbitrary claims.
    pub fn sign(&self, claims: &SessionClaims) -> Result<String, DomainError> {
        let payload = serde_json::to_vec(claims)
            .map_err(|e| DomainError::RepositoryError(format!("Failed to encode claims: {}", e)))?;
        let mut mac = self.mac()?;
        mac.update(&payload);
        let signature = mac.finalize().into_bytes();
        Ok(format!("{}.{}", hex::encode(&payload), hex::encode(signature)))
    }
}

impl SessionTokens for HmacSessionTokens {
    fn issue(&self, account: &Account) -> Result<String, DomainError> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            DomainError::RepositoryError("Token expiry is out of range".to_string())
        })?;
        self.sign(&SessionClaims {
            sub: account.id,
            email: account.email.clone(),
            role: CUSTOMER_ROLE.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        })
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, DomainError> {
        let (payload, signature) = token.split_once('.').ok_or_else(invalid)?;
        let payload = hex::decode(payload).map_err(|_| invalid())?;
        let signature = hex::decode(signature).map_err(|_| invalid())?;

        let mut mac = self.mac()?;
        mac.update(&payload);
        mac.verify_slice(&signature).map_err(|_| invalid())?;

        let claims: SessionClaims = serde_json::from_slice(&payload).map_err(|_| invalid())?;
        if claims.exp <= Utc::now().timestamp() {
            return Err(DomainError::Unauthorized("Token has expired".to_string()));
        }
        Ok(claims)
    }
}
