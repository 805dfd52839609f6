//! Row <-> model conversions. Money crosses this boundary as integer cents.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use storefront_sdk::{OrderOwner, OrderedProduct, Product, User};

use super::entity::{product, user};
use crate::domain::error::DomainError;

const CENTS_SCALE: u32 = 2;

pub(super) fn to_cents(amount: Decimal, field: &str) -> Result<i64, DomainError> {
    amount
        .round_dp(CENTS_SCALE)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.trunc().to_i64())
        .ok_or_else(|| DomainError::validation(field, "amount is out of range"))
}

pub(super) fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, CENTS_SCALE)
}

impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            is_admin: m.is_admin,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<user::Model> for OrderOwner {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
        }
    }
}

impl From<product::Model> for Product {
    fn from(m: product::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: from_cents(m.price_cents),
            stock: m.stock,
            category: m.category,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<product::Model> for OrderedProduct {
    fn from(m: product::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            category: m.category,
        }
    }
}
