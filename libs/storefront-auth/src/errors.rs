use thiserror::Error;

use crate::claims_error::ClaimsError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] ClaimsError),

    #[error("Invalid auth configuration: {0}")]
    InvalidConfig(String),

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
