use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by a storefront access token.
///
/// `sub` and `userId` both hold the user id; `userId` is kept for clients
/// that read the non-standard claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub email: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl TokenClaims {
    #[must_use]
    pub fn new(user_id: Uuid, email: impl Into<String>, iat: i64, exp: i64) -> Self {
        Self {
            sub: user_id,
            user_id,
            email: email.into(),
            iat,
            exp,
        }
    }
}
