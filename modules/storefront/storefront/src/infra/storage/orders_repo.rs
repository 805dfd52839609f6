use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use storefront_sdk::{
    Order, OrderLine, OrderOwner, OrderQuery, OrderSortField, OrderStats, OrderedProduct, Page,
    PageInfo,
};
use uuid::Uuid;

use super::entity::{order, order_item, product, user};
use super::mapper::{from_cents, to_cents};
use super::products_repo::{page_offset, sort_direction};
use crate::domain::error::DomainError;
use crate::domain::repos::{OrderScope, OrdersRepository};

#[derive(Debug, Clone, Copy, Default)]
pub struct OrmOrdersRepository;

/// Loads lines of the given orders, grouped by order id, in insertion order.
async fn load_lines<C: ConnectionTrait>(
    conn: &C,
    order_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, Vec<OrderLine>>, DomainError> {
    if order_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = order_item::Entity::find()
        .filter(order_item::Column::OrderId.is_in(order_ids))
        .order_by_asc(order_item::Column::Id)
        .all(conn)
        .await?;

    let mut product_ids: Vec<Uuid> = rows.iter().map(|r| r.product_id).collect();
    product_ids.sort_unstable();
    product_ids.dedup();

    let products: HashMap<Uuid, OrderedProduct> = product::Entity::find()
        .filter(product::Column::Id.is_in(product_ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|m| (m.id, OrderedProduct::from(m)))
        .collect();

    let mut grouped: HashMap<Uuid, Vec<OrderLine>> = HashMap::new();
    for row in rows {
        grouped.entry(row.order_id).or_default().push(OrderLine {
            id: row.id,
            product_id: row.product_id,
            quantity: row.quantity,
            price: from_cents(row.price_cents),
            product: products.get(&row.product_id).cloned(),
        });
    }
    Ok(grouped)
}

async fn load_owners<C: ConnectionTrait>(
    conn: &C,
    mut user_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, OrderOwner>, DomainError> {
    user_ids.sort_unstable();
    user_ids.dedup();
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let owners = user::Entity::find()
        .filter(user::Column::Id.is_in(user_ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|m| (m.id, OrderOwner::from(m)))
        .collect();
    Ok(owners)
}

fn assemble(
    row: order::Model,
    lines: &mut HashMap<Uuid, Vec<OrderLine>>,
    owners: &HashMap<Uuid, OrderOwner>,
) -> Order {
    Order {
        id: row.id,
        user_id: row.user_id,
        total: from_cents(row.total_cents),
        created_at: row.created_at,
        updated_at: row.updated_at,
        items: lines.remove(&row.id).unwrap_or_default(),
        owner: owners.get(&row.user_id).cloned(),
    }
}

#[async_trait]
impl OrdersRepository for OrmOrdersRepository {
    async fn create<C: ConnectionTrait>(&self, conn: &C, order: &Order) -> Result<(), DomainError> {
        let row = order::ActiveModel {
            id: Set(order.id),
            user_id: Set(order.user_id),
            total_cents: Set(to_cents(order.total, "total")?),
            created_at: Set(order.created_at),
            updated_at: Set(order.updated_at),
        };
        order::Entity::insert(row)
            .exec_without_returning(conn)
            .await?;

        let items = order
            .items
            .iter()
            .map(|line| {
                Ok(order_item::ActiveModel {
                    id: Set(line.id),
                    order_id: Set(order.id),
                    product_id: Set(line.product_id),
                    quantity: Set(line.quantity),
                    price_cents: Set(to_cents(line.price, "price")?),
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        if !items.is_empty() {
            order_item::Entity::insert_many(items)
                .exec_without_returning(conn)
                .await?;
        }
        Ok(())
    }

    async fn get<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Order>, DomainError> {
        let Some(row) = order::Entity::find_by_id(id).one(conn).await? else {
            return Ok(None);
        };

        let mut lines = load_lines(conn, vec![row.id]).await?;
        let owners = load_owners(conn, vec![row.user_id]).await?;
        Ok(Some(assemble(row, &mut lines, &owners)))
    }

    async fn list_page<C: ConnectionTrait>(
        &self,
        conn: &C,
        scope: OrderScope,
        query: &OrderQuery,
        page_size: u64,
    ) -> Result<Page<Order>, DomainError> {
        let mut select = order::Entity::find();
        if let OrderScope::Owner(user_id) = scope {
            select = select.filter(order::Column::UserId.eq(user_id));
        }
        let total = select.clone().count(conn).await?;

        let column = match query.sort_by {
            OrderSortField::Total => order::Column::TotalCents,
            OrderSortField::CreatedAt => order::Column::CreatedAt,
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
            .order_by(order::Column::Id, direction)
            .offset(offset)
            .limit(page_size)
            .all(conn)
            .await?;

        let mut lines = load_lines(conn, rows.iter().map(|r| r.id).collect()).await?;
        let owners = match scope {
            OrderScope::All => load_owners(conn, rows.iter().map(|r| r.user_id).collect()).await?,
            OrderScope::Owner(_) => HashMap::new(),
        };

        Ok(Page {
            items: rows
                .into_iter()
                .map(|row| assemble(row, &mut lines, &owners))
                .collect(),
            page_info: PageInfo::new(page, page_size, total),
        })
    }

    async fn stats<C: ConnectionTrait>(&self, conn: &C) -> Result<OrderStats, DomainError> {
        let total_orders = order::Entity::find().count(conn).await?;
        if total_orders == 0 {
            return Ok(OrderStats::default());
        }

        // SUM over BIGINT is NUMERIC on Postgres; cast back so both backends decode as i64.
        let revenue_cents = order::Entity::find()
            .select_only()
            .column_as(
                SimpleExpr::from(Func::cast_as(
                    Expr::col(order::Column::TotalCents).sum(),
                    Alias::new("BIGINT"),
                )),
                "revenue",
            )
            .into_tuple::<Option<i64>>()
            .one(conn)
            .await?
            .flatten()
            .unwrap_or(0);

        let total_revenue = from_cents(revenue_cents);
        let avg_order_value = (total_revenue / Decimal::from(total_orders)).round_dp(2);

        Ok(OrderStats {
            total_orders,
            total_revenue,
            avg_order_value,
        })
    }
}
