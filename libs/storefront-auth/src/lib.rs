#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

// Core modules
pub mod errors;
pub mod traits;

// Bearer tokens
pub mod claims;
pub mod claims_error;
pub mod config;
pub mod jwt;

// Credentials
pub mod password;

// Core exports
pub use errors::AuthError;
pub use traits::{PasswordHasher, TokenIssuer, TokenValidator};

// Token exports
pub use claims::TokenClaims;
pub use claims_error::ClaimsError;
pub use config::AuthConfig;
pub use jwt::Hs256TokenService;

// Credential exports
pub use password::BcryptPasswordHasher;
