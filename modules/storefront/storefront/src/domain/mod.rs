//! Domain layer: business rules over the SDK models.
//!
//! May import `storefront_sdk`, `storefront_auth` and `sea_orm` connection
//! traits. Must not import `api::*`.

pub mod error;
pub mod repos;
pub mod service;

pub use error::{DomainError, FieldError};
