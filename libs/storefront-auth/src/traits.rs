use async_trait::async_trait;
use uuid::Uuid;

use crate::{claims::TokenClaims, errors::AuthError};

/// Issues signed, time-bound bearer tokens.
pub trait TokenIssuer: Send + Sync {
    /// Sign a token for the given user.
    fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AuthError>;
}

/// Validates bearer tokens
pub trait TokenValidator: Send + Sync {
    /// Verify signature and expiry, returning the decoded claims.
    fn validate(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Salted one-way password hashing.
///
/// Implementations are expected to be deliberately slow; callers never run
/// them on the async executor threads directly.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}
