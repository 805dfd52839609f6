use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::ExposeSecret;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::{
    claims::TokenClaims, claims_error::ClaimsError, config::AuthConfig, errors::AuthError,
    traits::{TokenIssuer, TokenValidator},
};

/// HMAC-SHA256 token service: signs and verifies storefront access tokens.
pub struct Hs256TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl Hs256TokenService {
    pub fn from_config(cfg: &AuthConfig) -> Result<Self, AuthError> {
        let secret = cfg.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(AuthError::InvalidConfig("jwt_secret must be set".to_owned()));
        }
        let ttl_secs = i64::try_from(cfg.token_ttl_secs)
            .map_err(|_| AuthError::InvalidConfig("token_ttl_secs is too large".to_owned()))?;
        if ttl_secs == 0 {
            return Err(AuthError::InvalidConfig("token_ttl_secs must be positive".to_owned()));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::seconds(ttl_secs),
        })
    }

    /// Sign a token as if issued at `issued_at`.
    pub fn issue_at(
        &self,
        user_id: Uuid,
        email: &str,
        issued_at: OffsetDateTime,
    ) -> Result<String, AuthError> {
        let claims = TokenClaims::new(
            user_id,
            email,
            issued_at.unix_timestamp(),
            (issued_at + self.ttl).unix_timestamp(),
        );
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }
}

impl TokenIssuer for Hs256TokenService {
    fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AuthError> {
        self.issue_at(user_id, email, OffsetDateTime::now_utc())
    }
}

impl TokenValidator for Hs256TokenService {
    fn validate(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let data = decode::<TokenClaims>(token, &self.decoding, &self.validation)
            .map_err(ClaimsError::from)?;
        tracing::trace!(user_id = %data.claims.user_id, "Token validated");
        Ok(data.claims)
    }
}
