use std::sync::Arc;

use sea_orm::DatabaseConnection;
use storefront_auth::{PasswordHasher, TokenIssuer};
use storefront_sdk::{NewUser, User};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::{StoredUser, UsersRepository};

/// A freshly authenticated user and the bearer token issued for it.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub access_token: String,
}

/// Registration, login and principal lookup.
pub struct AuthService<R: UsersRepository> {
    db: DatabaseConnection,
    repo: Arc<R>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl<R: UsersRepository> AuthService<R> {
    pub fn new(
        db: DatabaseConnection,
        repo: Arc<R>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            db,
            repo,
            hasher,
            tokens,
        }
    }
}

impl<R: UsersRepository> AuthService<R> {
    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn register(&self, new_user: NewUser) -> Result<AuthSession, DomainError> {
        info!("Registering user");

        self.register_inner(new_user)
            .await
            .map_err(|e| e.or_bad_request("Failed to register user"))
    }

    async fn register_inner(&self, new_user: NewUser) -> Result<AuthSession, DomainError> {
        let email = new_user.email.trim().to_lowercase();

        if self.repo.find_by_email(&self.db, &email).await?.is_some() {
            debug!("Email already registered");
            return Err(DomainError::email_taken());
        }

        let password_hash = self.hasher.hash(&new_user.password).await?;

        let now = OffsetDateTime::now_utc();
        let user = User {
            id: Uuid::now_v7(),
            name: new_user.name.trim().to_owned(),
            email,
            is_admin: new_user.is_admin,
            created_at: now,
            updated_at: now,
        };

        self.repo
            .create(
                &self.db,
                StoredUser {
                    user: user.clone(),
                    password_hash,
                },
            )
            .await?;

        let access_token = self.tokens.issue(user.id, &user.email)?;

        info!("Successfully registered user with id={}", user.id);
        Ok(AuthSession { user, access_token })
    }

    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, DomainError> {
        debug!("Authenticating user");

        self.login_inner(email, password)
            .await
            .map_err(|e| e.or_bad_request("Login failed"))
    }

    async fn login_inner(&self, email: &str, password: &str) -> Result<AuthSession, DomainError> {
        let email = email.trim().to_lowercase();

        let Some(stored) = self.repo.find_by_email(&self.db, &email).await? else {
            debug!("Unknown email");
            return Err(DomainError::invalid_credentials());
        };

        if !self.hasher.verify(password, &stored.password_hash).await? {
            debug!("Password mismatch");
            return Err(DomainError::invalid_credentials());
        }

        let access_token = self.tokens.issue(stored.user.id, &stored.user.email)?;

        info!("User logged in with id={}", stored.user.id);
        Ok(AuthSession {
            user: stored.user,
            access_token,
        })
    }

    /// Resolves a token subject to its public projection. `None` when the user is gone.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn validate_user(&self, user_id: Uuid) -> Result<Option<User>, DomainError> {
        debug!("Resolving principal");
        self.repo.get(&self.db, user_id).await
    }
}
