use async_trait::async_trait;
use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use storefront_sdk::{
    Page, PageInfo, Product, ProductQuery, ProductSortField, SortOrder,
};
use time::OffsetDateTime;
use uuid::Uuid;

use super::entity::{order_item, product};
use super::mapper::to_cents;
use crate::domain::error::DomainError;
use crate::domain::repos::ProductsRepository;

#[derive(Debug, Clone, Copy, Default)]
pub struct OrmProductsRepository;

/// Escapes `LIKE` metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Case folding for stored search keys and search input. Done in Rust so
/// every backend compares the same Unicode lower-case forms.
fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// `folded_column LIKE '%needle%'` with the needle folded and escaped.
fn contains_folded(column: product::Column, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&fold(needle)));
    Expr::col(column).like(LikeExpr::new(pattern).escape('\\'))
}

/// Offset of the first row on `page`, or `None` when it lies beyond what
/// the database can address.
pub(super) fn page_offset(page: u64, page_size: u64) -> Option<u64> {
    page.saturating_sub(1)
        .checked_mul(page_size)
        .filter(|offset| i64::try_from(*offset).is_ok())
}

pub(super) fn sort_direction(order: SortOrder) -> Order {
    match order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

fn filter_condition(query: &ProductQuery) -> Result<Condition, DomainError> {
    let mut cond = Condition::all();

    if let Some(category) = query.category.as_deref() {
        cond = cond.add(contains_folded(product::Column::CategoryFolded, category));
    }
    if let Some(min) = query.min_price {
        cond = cond.add(product::Column::PriceCents.gte(to_cents(min, "minPrice")?));
    }
    if let Some(max) = query.max_price {
        cond = cond.add(product::Column::PriceCents.lte(to_cents(max, "maxPrice")?));
    }
    if let Some(search) = query.search.as_deref() {
        cond = cond.add(
            Condition::any()
                .add(contains_folded(product::Column::NameFolded, search))
                .add(contains_folded(product::Column::DescriptionFolded, search)),
        );
    }

    Ok(cond)
}

fn active_model(p: &Product) -> Result<product::ActiveModel, DomainError> {
    Ok(product::ActiveModel {
        id: Set(p.id),
        name: Set(p.name.clone()),
        description: Set(p.description.clone()),
        price_cents: Set(to_cents(p.price, "price")?),
        stock: Set(p.stock),
        category: Set(p.category.clone()),
        name_folded: Set(fold(&p.name)),
        description_folded: Set(p.description.as_deref().map(fold)),
        category_folded: Set(fold(&p.category)),
        created_at: Set(p.created_at),
        updated_at: Set(p.updated_at),
    })
}

#[async_trait]
impl ProductsRepository for OrmProductsRepository {
    async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Product>, DomainError> {
        let found = product::Entity::find_by_id(id).one(conn).await?;
        Ok(found.map(Product::from))
    }

    async fn list_page<C: ConnectionTrait>(
        &self,
        conn: &C,
        query: &ProductQuery,
        page_size: u64,
    ) -> Result<Page<Product>, DomainError> {
        let select = product::Entity::find().filter(filter_condition(query)?);
        let total = select.clone().count(conn).await?;

        let column = match query.sort_by {
            ProductSortField::Name => product::Column::Name,
            ProductSortField::Price => product::Column::PriceCents,
            ProductSortField::CreatedAt => product::Column::CreatedAt,
        };
        let direction = sort_direction(query.sort_order);
        let page = query.page.max(1);
        let Some(offset) = page_offset(page, page_size) else {
            return Ok(Page {
                items: Vec::new(),
                page_info: PageInfo::new(page, page_size, total),
            });
        };

        let rows = select
            .order_by(column, direction.clone())
            .order_by(product::Column::Id, direction)
            .offset(offset)
            .limit(page_size)
            .all(conn)
            .await?;

        Ok(Page {
            items: rows.into_iter().map(Product::from).collect(),
            page_info: PageInfo::new(page, page_size, total),
        })
    }

    async fn create<C: ConnectionTrait>(
        &self,
        conn: &C,
        product: &Product,
    ) -> Result<(), DomainError> {
        product::Entity::insert(active_model(product)?)
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    async fn update<C: ConnectionTrait>(
        &self,
        conn: &C,
        product: &Product,
    ) -> Result<(), DomainError> {
        let mut row = active_model(product)?;
        row.id = ActiveValue::Unchanged(product.id);
        row.created_at = ActiveValue::NotSet;

        product::Entity::update(row).exec(conn).await?;
        Ok(())
    }

    async fn delete<C: ConnectionTrait>(&self, conn: &C, id: Uuid) -> Result<bool, DomainError> {
        let res = product::Entity::delete_by_id(id).exec(conn).await?;
        Ok(res.rows_affected > 0)
    }

    async fn count_order_references<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<u64, DomainError> {
        let count = order_item::Entity::find()
            .filter(order_item::Column::ProductId.eq(id))
            .count(conn)
            .await?;
        Ok(count)
    }

    async fn categories<C: ConnectionTrait>(&self, conn: &C) -> Result<Vec<String>, DomainError> {
        let categories = product::Entity::find()
            .select_only()
            .column(product::Column::Category)
            .distinct()
            .order_by_asc(product::Column::Category)
            .into_tuple::<String>()
            .all(conn)
            .await?;
        Ok(categories)
    }

    async fn decrement_stock<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: Uuid,
        quantity: i32,
    ) -> Result<(), DomainError> {
        product::Entity::update_many()
            .col_expr(
                product::Column::Stock,
                Expr::col(product::Column::Stock).sub(quantity),
            )
            .col_expr(
                product::Column::UpdatedAt,
                Expr::value(OffsetDateTime::now_utc()),
            )
            .filter(product::Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(())
    }
}
