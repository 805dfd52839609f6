//! Storefront SDK
//!
//! Transport-agnostic contract types for the `storefront` module:
//!
//! - Users: [`User`], [`NewUser`]
//! - Catalog: [`Product`], [`NewProduct`], [`ProductPatch`], [`ProductQuery`]
//! - Orders: [`Order`], [`OrderLine`], [`OrderItemRequest`], [`OrderQuery`], [`OrderStats`]
//! - Paging: [`Page`], [`PageInfo`]
//!
//! These carry no serde or ORM derives; the REST layer owns the wire format
//! and the storage layer owns the row format.

pub mod models;

pub use models::{
    NewProduct, NewUser, Order, OrderItemRequest, OrderLine, OrderOwner, OrderQuery,
    OrderSortField, OrderStats, OrderedProduct, Page, PageInfo, Product, ProductPatch,
    ProductQuery, ProductSortField, SortOrder, User,
};
