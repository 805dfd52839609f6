use sea_orm::{DbErr, SqlErr};
use std::fmt;
use storefront_auth::AuthError;
use uuid::Uuid;

/// One failing request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors surfaced by the storefront services.
///
/// `Database` and `Internal` never leave a service as-is: they are flattened
/// into `BadRequest` with the operation's message by [`DomainError::or_bad_request`].
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Request shape rejected before reaching the store.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(resource: &str, id: Uuid) -> Self {
        Self::NotFound(format!("{resource} with ID {id} not found"))
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, message)])
    }

    pub fn email_taken() -> Self {
        Self::Conflict("User with this email already exists".to_owned())
    }

    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("Invalid email or password".to_owned())
    }

    pub fn insufficient_stock(product_name: &str, available: i32, requested: i32) -> Self {
        Self::BadRequest(format!(
            "Insufficient stock for product \"{product_name}\". Available: {available}, Requested: {requested}"
        ))
    }

    pub fn product_in_orders() -> Self {
        Self::BadRequest(
            "Cannot delete product that exists in orders. Consider updating stock to 0 instead."
                .to_owned(),
        )
    }

    pub fn foreign_order() -> Self {
        Self::Forbidden("You can only access your own orders".to_owned())
    }

    /// Replaces internal failures with a fixed client-facing message.
    /// Domain kinds pass through untouched.
    #[must_use]
    pub fn or_bad_request(self, message: &str) -> Self {
        match self {
            Self::Database(_) | Self::Internal(_) => {
                tracing::error!(error = %self, "{message}");
                Self::BadRequest(message.to_owned())
            }
            other => other,
        }
    }

    /// Unique-key violations become `Conflict`; everything else stays a database error.
    pub fn from_insert(err: DbErr, on_conflict: impl FnOnce() -> Self) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => on_conflict(),
            _ => Self::Database(err),
        }
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        Self::Internal(err.to_string())
    }
}
