use crate::entities::{Account, AuthSession, LoginInput, RegisterInput, CUSTOMER_ROLE};
use crate::errors::DomainError;
use crate::repositories::AccountRepository;
use crate::security::{PasswordHasher, SessionClaims, SessionTokens};
use std::sync::Arc;
use tracing::{info, warn};

const INVALID_CREDENTIALS: &str = "Invalid email or password";
const DUPLICATE_EMAIL: &str = "A customer with this email already exists";

/// Customer registration, sign-in and session checks.
///
/// Passwords are only ever stored as hashes produced by the configured
/// [`PasswordHasher`]; verification happens here, server-side.
pub struct AuthService {
    account_repository: Arc<dyn AccountRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    session_tokens: Arc<dyn SessionTokens>,
}

impl AuthService {
    pub fn new(
        account_repository: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_tokens: Arc<dyn SessionTokens>,
    ) -> Self {
        Self {
            account_repository,
            password_hasher,
            session_tokens,
        }
    }

    pub async fn register(&self, input: RegisterInput) -> Result<AuthSession, DomainError> {
        let registration = input.validate()?;

        if self
            .account_repository
            .email_exists(&registration.email)
            .await?
        {
            return Err(DomainError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let password_hash = self.password_hasher.hash(&registration.password).await?;
        // A concurrent registration can still win the race; the store's
        // unique constraint turns that into the same conflict.
        let account = self
            .account_repository
            .create(&registration.into_account(password_hash))
            .await
            .map_err(|e| match e {
                DomainError::Conflict(_) => DomainError::Conflict(DUPLICATE_EMAIL.to_string()),
                other => other,
            })?;

        info!(customer_id = account.id, "customer registered");
        self.open_session(account)
    }

    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, DomainError> {
        let (email, password) = input.validate()?;

        let credentials = self.account_repository.find_by_email(&email).await?;
        let stored_hash = credentials
            .as_ref()
            .and_then(|c| c.password_hash.as_deref());

        let verified = self.password_hasher.verify(&password, stored_hash).await?;
        match credentials {
            Some(credentials) if verified => {
                info!(customer_id = credentials.account.id, "customer signed in");
                self.open_session(credentials.account)
            }
            _ => {
                warn!("rejected sign-in attempt");
                Err(DomainError::Unauthorized(INVALID_CREDENTIALS.to_string()))
            }
        }
    }

    /// Verifies a session credential and checks that it belongs to a customer.
    pub fn authenticate(&self, token: &str) -> Result<SessionClaims, DomainError> {
        let claims = self.session_tokens.verify(token)?;
        if claims.role != CUSTOMER_ROLE {
            return Err(DomainError::Forbidden(
                "Access denied. Customer authentication required.".to_string(),
            ));
        }
        Ok(claims)
    }

    pub async fn profile(&self, claims: &SessionClaims) -> Result<Account, DomainError> {
        self.account_repository
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| DomainError::not_found("Customer not found"))
    }

    fn open_session(&self, account: Account) -> Result<AuthSession, DomainError> {
        let token = self.session_tokens.issue(&account)?;
        Ok(AuthSession {
            customer: account,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{FakeStore, FakeTokens, PlainHasher};

    fn service(store: &Arc<FakeStore>) -> AuthService {
        AuthService::new(store.clone(), Arc::new(PlainHasher), Arc::new(FakeTokens))
    }

    fn register_input(email: &str) -> RegisterInput {
        RegisterInput {
            email: Some(email.to_string()),
            password: Some("password123".to_string()),
            first_name: Some("Grace".to_string()),
            last_name: Some("Hopper".to_string()),
        }
    }

    fn login_input(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn register_then_login() {
        let store = Arc::new(FakeStore::default());
        let service = service(&store);

        let registered = service.register(register_input("Grace@Navy.mil")).await.unwrap();
        assert_eq!(registered.customer.email, "grace@navy.mil");
        assert_eq!(registered.customer.first_name.as_deref(), Some("Grace"));

        let session = service
            .login(login_input("GRACE@navy.mil", "password123"))
            .await
            .unwrap();
        assert_eq!(session.customer.id, registered.customer.id);

        let claims = service.authenticate(&session.token).unwrap();
        assert_eq!(claims.sub, registered.customer.id);
        assert_eq!(service.profile(&claims).await.unwrap().email, "grace@navy.mil");
    }

    #[tokio::test]
    async fn duplicate_registration_is_a_conflict() {
        let store = Arc::new(FakeStore::default());
        let service = service(&store);
        service.register(register_input("grace@navy.mil")).await.unwrap();

        assert_eq!(
            service.register(register_input("grace@navy.mil")).await.unwrap_err(),
            DomainError::Conflict(DUPLICATE_EMAIL.to_string())
        );
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let store = Arc::new(FakeStore::default());
        store.add_customer("No Password", "nopass@example.com");
        let service = service(&store);
        service.register(register_input("grace@navy.mil")).await.unwrap();

        let wrong_password = service
            .login(login_input("grace@navy.mil", "not-it"))
            .await
            .unwrap_err();
        let unknown_email = service
            .login(login_input("nobody@navy.mil", "password123"))
            .await
            .unwrap_err();
        let no_hash = service
            .login(login_input("nopass@example.com", "password123"))
            .await
            .unwrap_err();

        assert_eq!(wrong_password, DomainError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        assert_eq!(wrong_password, unknown_email);
        assert_eq!(wrong_password, no_hash);
    }

    #[tokio::test]
    async fn non_customer_role_is_forbidden() {
        let store = Arc::new(FakeStore::default());
        let service = service(&store);

        assert!(matches!(
            service.authenticate("1:admin"),
            Err(DomainError::Forbidden(_))
        ));
        assert!(matches!(
            service.authenticate("expired"),
            Err(DomainError::Unauthorized(_))
        ));
    }
}
