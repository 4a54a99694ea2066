use async_trait::async_trait;
use domain::{DomainError, PasswordHasher};
use tracing::error;

/// bcrypt on the blocking pool; hashing at a real cost takes tens of
/// milliseconds and must not stall the runtime.
pub struct BcryptPasswordHasher {
    cost: u32,
    decoy_hash: String,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Result<Self, DomainError> {
        let decoy_hash = bcrypt::hash("decoy-password", cost)
            .map_err(|e| DomainError::RepositoryError(format!("Invalid bcrypt cost: {}", e)))?;
        Ok(Self { cost, decoy_hash })
    }
}

async fn blocking<T, F>(task: F) -> Result<T, DomainError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| DomainError::RepositoryError(format!("Hashing task failed: {}", e)))
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_owned();
        let cost = self.cost;
        blocking(move || bcrypt::hash(password, cost))
            .await?
            .map_err(|e| DomainError::RepositoryError(format!("Failed to hash password: {}", e)))
    }

    async fn verify(&self, password: &str, hash: Option<&str>) -> Result<bool, DomainError> {
        let password = password.to_owned();
        let (target, real) = match hash {
            Some(hash) => (hash.to_owned(), true),
            None => (self.decoy_hash.clone(), false),
        };

        let outcome = blocking(move || bcrypt::verify(password, &target)).await?;
        match outcome {
            Ok(matched) => Ok(matched && real),
            Err(e) => {
                error!(error = %e, "stored password hash is malformed");
                Ok(false)
            }
        }
    }
}
