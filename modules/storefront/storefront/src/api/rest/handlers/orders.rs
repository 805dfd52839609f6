use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use storefront_sdk::OrderQuery;

use crate::api::rest::dto::{
    CreateOrderReq, CreateOrderResponse, OrderDetailDto, OrderListQuery, OrderListResponse,
    OrderStatsDto, OrderSummaryDto,
};
use crate::api::rest::error::{ApiResult, Problem};
use crate::api::rest::extract::{IdPath, ValidJson, ValidQuery};
use crate::api::rest::guards::Principal;
use crate::api::rest::routes::ApiState;

#[tracing::instrument(skip(state, principal, req), fields(user.id = %principal.0.id))]
pub async fn create(
    State(state): State<ApiState>,
    Extension(principal): Extension<Principal>,
    ValidJson(req): ValidJson<CreateOrderReq>,
) -> ApiResult<(StatusCode, Json<CreateOrderResponse>)> {
    let items = req.to_items().map_err(Problem::validation)?;
    let order = state
        .services
        .orders
        .create_order(principal.0.id, &items)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            message: "Order created successfully".to_owned(),
            order: order.into(),
        }),
    ))
}

pub async fn list_mine(
    State(state): State<ApiState>,
    Extension(principal): Extension<Principal>,
    ValidQuery(query): ValidQuery<OrderListQuery>,
) -> ApiResult<Json<OrderListResponse>> {
    let page = state
        .services
        .orders
        .list_user_orders_page(principal.0.id, &OrderQuery::from(query))
        .await?;

    Ok(Json(OrderListResponse {
        orders: page.items.into_iter().map(OrderSummaryDto::from).collect(),
        pagination: page.page_info.into(),
    }))
}

pub async fn list_all(
    State(state): State<ApiState>,
    ValidQuery(query): ValidQuery<OrderListQuery>,
) -> ApiResult<Json<OrderListResponse>> {
    let page = state
        .services
        .orders
        .list_all_orders_page(&OrderQuery::from(query))
        .await?;

    Ok(Json(OrderListResponse {
        orders: page.items.into_iter().map(OrderSummaryDto::from).collect(),
        pagination: page.page_info.into(),
    }))
}

pub async fn stats(State(state): State<ApiState>) -> ApiResult<Json<OrderStatsDto>> {
    let stats = state.services.orders.order_stats().await?;
    Ok(Json(stats.into()))
}

pub async fn get(
    State(state): State<ApiState>,
    Extension(principal): Extension<Principal>,
    IdPath(id): IdPath,
) -> ApiResult<Json<OrderDetailDto>> {
    let order = state
        .services
        .orders
        .get_order(id, principal.0.id, principal.is_admin())
        .await?;
    Ok(Json(order.into()))
}
