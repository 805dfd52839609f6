//! Wire types. JSON uses camelCase; money is an exact decimal string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_sdk::{
    NewProduct, NewUser, Order, OrderItemRequest, OrderLine, OrderOwner, OrderQuery,
    OrderSortField, OrderStats, OrderedProduct, PageInfo, Product, ProductPatch, ProductQuery,
    ProductSortField, SortOrder, User,
};
use time::OffsetDateTime;
use uuid::Uuid;

use super::extract::Validate;
use crate::domain::error::FieldError;

const MIN_PASSWORD_LEN: usize = 6;
const MONEY_SCALE: u32 = 2;

/// Collects failing fields for one request.
#[derive(Default)]
struct Violations(Vec<FieldError>);

impl Violations {
    fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.0.push(FieldError::new(field, message));
        }
    }

    fn not_blank(&mut self, value: &str, field: &str) {
        self.check(
            !value.trim().is_empty(),
            field,
            &format!("{field} should not be empty"),
        );
    }

    fn email(&mut self, value: &str, field: &str) {
        self.check(is_email(value), field, &format!("{field} must be an email"));
    }

    fn money(&mut self, value: Decimal, field: &str, allow_zero: bool) {
        if allow_zero {
            self.check(
                !value.is_sign_negative(),
                field,
                &format!("{field} must not be less than 0"),
            );
        } else {
            self.check(
                value > Decimal::ZERO,
                field,
                &format!("{field} must be a positive number"),
            );
        }
        self.check(
            value.normalize().scale() <= MONEY_SCALE,
            field,
            &format!("{field} must have at most {MONEY_SCALE} decimal places"),
        );
    }

    fn stock(&mut self, value: i64, field: &str) {
        self.check(value >= 0, field, &format!("{field} must not be less than 0"));
        self.check(
            i32::try_from(value).is_ok(),
            field,
            &format!("{field} is out of range"),
        );
    }

    fn page_bounds(&mut self, page: Option<u64>, limit: Option<u64>) {
        self.check(page != Some(0), "page", "page must not be less than 1");
        self.check(limit != Some(0), "limit", "limit must not be less than 1");
    }

    fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}

fn is_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterReq {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: Option<bool>,
}

impl Validate for RegisterReq {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Violations::default();
        v.not_blank(&self.name, "name");
        v.email(&self.email, "email");
        v.check(
            self.password.chars().count() >= MIN_PASSWORD_LEN,
            "password",
            "password must be longer than or equal to 6 characters",
        );
        v.finish()
    }
}

impl From<RegisterReq> for NewUser {
    fn from(req: RegisterReq) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            is_admin: req.is_admin.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReq {
    pub email: String,
    pub password: String,
}

impl Validate for LoginReq {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Violations::default();
        v.email(&self.email, "email");
        v.not_blank(&self.password, "password");
        v.finish()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            is_admin: u.is_admin,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserDto,
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductReq {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i64,
    pub category: String,
}

impl Validate for CreateProductReq {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Violations::default();
        v.not_blank(&self.name, "name");
        v.money(self.price, "price", false);
        v.stock(self.stock, "stock");
        v.not_blank(&self.category, "category");
        v.finish()
    }
}

impl TryFrom<CreateProductReq> for NewProduct {
    type Error = Vec<FieldError>;

    fn try_from(req: CreateProductReq) -> Result<Self, Self::Error> {
        let stock = i32::try_from(req.stock)
            .map_err(|_| vec![FieldError::new("stock", "stock is out of range")])?;
        Ok(Self {
            name: req.name,
            description: req.description,
            price: req.price,
            stock,
            category: req.category,
        })
    }
}

/// Every field optional; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductReq {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
    pub category: Option<String>,
}

impl Validate for UpdateProductReq {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Violations::default();
        if let Some(name) = &self.name {
            v.not_blank(name, "name");
        }
        if let Some(price) = self.price {
            v.money(price, "price", false);
        }
        if let Some(stock) = self.stock {
            v.stock(stock, "stock");
        }
        if let Some(category) = &self.category {
            v.not_blank(category, "category");
        }
        v.finish()
    }
}

impl TryFrom<UpdateProductReq> for ProductPatch {
    type Error = Vec<FieldError>;

    fn try_from(req: UpdateProductReq) -> Result<Self, Self::Error> {
        let stock = req
            .stock
            .map(i32::try_from)
            .transpose()
            .map_err(|_| vec![FieldError::new("stock", "stock is out of range")])?;
        Ok(Self {
            name: req.name,
            description: req.description,
            price: req.price,
            stock,
            category: req.category,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductSortBy {
    Name,
    Price,
    #[default]
    CreatedAt,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrderDto {
    Asc,
    #[default]
    Desc,
}

impl From<SortOrderDto> for SortOrder {
    fn from(o: SortOrderDto) -> Self {
        match o {
            SortOrderDto::Asc => Self::Asc,
            SortOrderDto::Desc => Self::Desc,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search: Option<String>,
    pub sort_by: Option<ProductSortBy>,
    pub sort_order: Option<SortOrderDto>,
}

impl Validate for ProductListQuery {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Violations::default();
        v.page_bounds(self.page, self.limit);
        if let Some(min) = self.min_price {
            v.money(min, "minPrice", true);
        }
        if let Some(max) = self.max_price {
            v.money(max, "maxPrice", true);
        }
        v.finish()
    }
}

impl ProductListQuery {
    /// Normalized filters, echoed back in the listing response.
    pub fn filters(&self) -> ProductFiltersDto {
        ProductFiltersDto {
            category: non_blank(self.category.clone()),
            min_price: self.min_price,
            max_price: self.max_price,
            search: non_blank(self.search.clone()),
            sort_by: self.sort_by.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
        }
    }

    pub fn to_query(&self) -> ProductQuery {
        let filters = self.filters();
        ProductQuery {
            page: self.page.unwrap_or(1),
            limit: self.limit,
            category: filters.category,
            min_price: filters.min_price,
            max_price: filters.max_price,
            search: filters.search,
            sort_by: match filters.sort_by {
                ProductSortBy::Name => ProductSortField::Name,
                ProductSortBy::Price => ProductSortField::Price,
                ProductSortBy::CreatedAt => ProductSortField::CreatedAt,
            },
            sort_order: filters.sort_order.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFiltersDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub sort_by: ProductSortBy,
    pub sort_order: SortOrderDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub category: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            stock: p.stock,
            category: p.category,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductMutationResponse {
    pub message: String,
    pub product: ProductDto,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl From<PageInfo> for PaginationDto {
    fn from(p: PageInfo) -> Self {
        Self {
            current_page: p.current_page,
            total_pages: p.total_pages,
            total_items: p.total_items,
            items_per_page: p.items_per_page,
            has_next_page: p.has_next_page,
            has_prev_page: p.has_prev_page,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductDto>,
    pub pagination: PaginationDto,
    pub filters: ProductFiltersDto,
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemReq {
    pub product_id: Uuid,
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderReq {
    pub items: Vec<OrderItemReq>,
}

impl Validate for CreateOrderReq {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Violations::default();
        v.check(
            !self.items.is_empty(),
            "items",
            "items must contain at least 1 element",
        );
        for (i, item) in self.items.iter().enumerate() {
            let field = format!("items.{i}.quantity");
            v.check(
                item.quantity >= 1,
                &field,
                "quantity must not be less than 1",
            );
            v.check(
                i32::try_from(item.quantity).is_ok(),
                &field,
                "quantity is out of range",
            );
        }
        v.finish()
    }
}

impl CreateOrderReq {
    pub fn to_items(&self) -> Result<Vec<OrderItemRequest>, Vec<FieldError>> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let quantity = i32::try_from(item.quantity).map_err(|_| {
                    vec![FieldError::new(
                        format!("items.{i}.quantity"),
                        "quantity is out of range",
                    )]
                })?;
                Ok(OrderItemRequest {
                    product_id: item.product_id,
                    quantity,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderSortBy {
    Total,
    #[default]
    CreatedAt,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort_by: Option<OrderSortBy>,
    pub sort_order: Option<SortOrderDto>,
}

impl Validate for OrderListQuery {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut v = Violations::default();
        v.page_bounds(self.page, self.limit);
        v.finish()
    }
}

impl From<OrderListQuery> for OrderQuery {
    fn from(q: OrderListQuery) -> Self {
        Self {
            page: q.page.unwrap_or(1),
            limit: q.limit,
            sort_by: match q.sort_by.unwrap_or_default() {
                OrderSortBy::Total => OrderSortField::Total,
                OrderSortBy::CreatedAt => OrderSortField::CreatedAt,
            },
            sort_order: q.sort_order.unwrap_or_default().into(),
        }
    }
}

/// Product projection embedded in order lines of listings and creation results.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub category: String,
}

impl From<OrderedProduct> for ProductSummaryDto {
    fn from(p: OrderedProduct) -> Self {
        Self {
            id: p.id,
            name: p.name,
            category: p.category,
        }
    }
}

/// Product projection of the order detail view.
#[derive(Debug, Clone, Serialize)]
pub struct OrderedProductDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
}

impl From<OrderedProduct> for OrderedProductDto {
    fn from(p: OrderedProduct) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            category: p.category,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OwnerDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<OrderOwner> for OwnerDto {
    fn from(o: OrderOwner) -> Self {
        Self {
            id: o.id,
            name: o.name,
            email: o.email,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineDto {
    pub id: Uuid,
    pub quantity: i32,
    pub price: Decimal,
    pub product: Option<ProductSummaryDto>,
}

impl From<OrderLine> for OrderLineDto {
    fn from(l: OrderLine) -> Self {
        Self {
            id: l.id,
            quantity: l.quantity,
            price: l.price,
            product: l.product.map(ProductSummaryDto::from),
        }
    }
}

/// Result of a successful checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrderDto {
    pub id: Uuid,
    pub total: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub items: Vec<OrderLineDto>,
}

impl From<Order> for CreatedOrderDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            total: o.total,
            created_at: o.created_at,
            items: o.items.into_iter().map(OrderLineDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderResponse {
    pub message: String,
    pub order: CreatedOrderDto,
}

/// Entry of an order listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryDto {
    pub id: Uuid,
    pub total: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub items_count: usize,
    pub items: Vec<OrderLineDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<OwnerDto>,
}

impl From<Order> for OrderSummaryDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            total: o.total,
            created_at: o.created_at,
            updated_at: o.updated_at,
            items_count: o.items.len(),
            items: o.items.into_iter().map(OrderLineDto::from).collect(),
            user: o.owner.map(OwnerDto::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<OrderSummaryDto>,
    pub pagination: PaginationDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailLineDto {
    pub id: Uuid,
    pub quantity: i32,
    pub price: Decimal,
    pub subtotal: Decimal,
    pub product: Option<OrderedProductDto>,
}

impl From<OrderLine> for OrderDetailLineDto {
    fn from(l: OrderLine) -> Self {
        Self {
            id: l.id,
            quantity: l.quantity,
            price: l.price,
            subtotal: l.subtotal(),
            product: l.product.map(OrderedProductDto::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailDto {
    pub id: Uuid,
    pub total: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub user: Option<OwnerDto>,
    pub items: Vec<OrderDetailLineDto>,
}

impl From<Order> for OrderDetailDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            total: o.total,
            created_at: o.created_at,
            updated_at: o.updated_at,
            user: o.owner.map(OwnerDto::from),
            items: o.items.into_iter().map(OrderDetailLineDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatsDto {
    pub total_orders: u64,
    pub total_revenue: Decimal,
    pub avg_order_value: Decimal,
}

impl From<OrderStats> for OrderStatsDto {
    fn from(s: OrderStats) -> Self {
        Self {
            total_orders: s.total_orders,
            total_revenue: s.total_revenue,
            avg_order_value: s.avg_order_value,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn fields(err: Vec<FieldError>) -> Vec<String> {
        err.into_iter().map(|e| e.field).collect()
    }

    #[test]
    fn email_shape() {
        assert!(is_email("jane@example.com"));
        assert!(is_email("j.doe+shop@mail.example.org"));
        assert!(!is_email("jane"));
        assert!(!is_email("jane@"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("jane@example"));
        assert!(!is_email("ja ne@example.com"));
    }

    #[test]
    fn register_reports_every_failing_field() {
        let req: RegisterReq = serde_json::from_value(serde_json::json!({
            "name": "  ",
            "email": "nope",
            "password": "123"
        }))
        .unwrap();
        let err = req.validate().unwrap_err();
        assert_eq!(fields(err), vec!["name", "email", "password"]);
    }

    #[test]
    fn register_is_admin_defaults_to_false() {
        let req: RegisterReq = serde_json::from_value(serde_json::json!({
            "name": "Jane",
            "email": "jane@example.com",
            "password": "secret1"
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        assert!(!NewUser::from(req).is_admin);
    }

    #[test]
    fn price_accepts_numbers_and_strings() {
        let from_number: CreateProductReq = serde_json::from_value(serde_json::json!({
            "name": "Mouse", "price": 19.99, "stock": 3, "category": "Peripherals"
        }))
        .unwrap();
        let from_string: CreateProductReq = serde_json::from_value(serde_json::json!({
            "name": "Mouse", "price": "19.99", "stock": 3, "category": "Peripherals"
        }))
        .unwrap();
        assert_eq!(from_number.price, Decimal::new(1999, 2));
        assert_eq!(from_string.price, Decimal::new(1999, 2));
    }

    #[test]
    fn price_rules() {
        let req = CreateProductReq {
            name: "Mouse".to_owned(),
            description: None,
            price: Decimal::new(19_999, 3),
            stock: -1,
            category: "Peripherals".to_owned(),
        };
        assert_eq!(fields(req.validate().unwrap_err()), vec!["price", "stock"]);

        let req = CreateProductReq {
            price: Decimal::ZERO,
            stock: 0,
            ..req
        };
        assert_eq!(fields(req.validate().unwrap_err()), vec!["price"]);
    }

    #[test]
    fn trailing_zeros_do_not_count_as_extra_scale() {
        let mut v = Violations::default();
        v.money(Decimal::new(19_900, 3), "price", false);
        assert!(v.finish().is_ok());
    }

    #[test]
    fn update_only_checks_present_fields() {
        let req = UpdateProductReq {
            stock: Some(5),
            ..UpdateProductReq::default()
        };
        assert!(req.validate().is_ok());
        let patch = ProductPatch::try_from(req).unwrap();
        assert_eq!(patch.stock, Some(5));
        assert!(patch.name.is_none());
    }

    #[test]
    fn order_items_rules() {
        let req: CreateOrderReq = serde_json::from_value(serde_json::json!({ "items": [] })).unwrap();
        assert_eq!(fields(req.validate().unwrap_err()), vec!["items"]);

        let req: CreateOrderReq = serde_json::from_value(serde_json::json!({
            "items": [{ "productId": Uuid::nil(), "quantity": 0 }]
        }))
        .unwrap();
        assert_eq!(fields(req.validate().unwrap_err()), vec!["items.0.quantity"]);
    }

    #[test]
    fn product_query_defaults_and_blank_filters() {
        let q = ProductListQuery {
            category: Some(String::new()),
            search: Some("desk".to_owned()),
            ..ProductListQuery::default()
        };
        let query = q.to_query();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, None);
        assert_eq!(query.category, None);
        assert_eq!(query.search.as_deref(), Some("desk"));
        assert_eq!(query.sort_by, ProductSortField::CreatedAt);
        assert_eq!(query.sort_order, SortOrder::Desc);
    }

    #[test]
    fn page_zero_is_rejected() {
        let q = OrderListQuery {
            page: Some(0),
            ..OrderListQuery::default()
        };
        assert_eq!(fields(q.validate().unwrap_err()), vec!["page"]);
    }
}
