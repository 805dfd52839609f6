use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use storefront_sdk::{NewProduct, ProductPatch};

use crate::api::rest::dto::{
    CreateProductReq, MessageResponse, ProductDto, ProductListQuery, ProductListResponse,
    ProductMutationResponse, UpdateProductReq,
};
use crate::api::rest::error::{ApiResult, Problem};
use crate::api::rest::extract::{IdPath, ValidJson, ValidQuery};
use crate::api::rest::routes::ApiState;

pub async fn create(
    State(state): State<ApiState>,
    ValidJson(req): ValidJson<CreateProductReq>,
) -> ApiResult<(StatusCode, Json<ProductMutationResponse>)> {
    let new_product = NewProduct::try_from(req).map_err(Problem::validation)?;
    let product = state.services.products.create_product(new_product).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductMutationResponse {
            message: "Product created successfully".to_owned(),
            product: product.into(),
        }),
    ))
}

pub async fn list(
    State(state): State<ApiState>,
    ValidQuery(query): ValidQuery<ProductListQuery>,
) -> ApiResult<Json<ProductListResponse>> {
    let page = state
        .services
        .products
        .list_products_page(&query.to_query())
        .await?;

    Ok(Json(ProductListResponse {
        products: page.items.into_iter().map(ProductDto::from).collect(),
        pagination: page.page_info.into(),
        filters: query.filters(),
    }))
}

pub async fn categories(State(state): State<ApiState>) -> ApiResult<Json<Vec<String>>> {
    let categories = state.services.products.list_categories().await?;
    Ok(Json(categories))
}

pub async fn get(
    State(state): State<ApiState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ProductDto>> {
    let product = state.services.products.get_product(id).await?;
    Ok(Json(product.into()))
}

pub async fn update(
    State(state): State<ApiState>,
    IdPath(id): IdPath,
    ValidJson(req): ValidJson<UpdateProductReq>,
) -> ApiResult<Json<ProductMutationResponse>> {
    let patch = ProductPatch::try_from(req).map_err(Problem::validation)?;
    let product = state.services.products.update_product(id, patch).await?;

    Ok(Json(ProductMutationResponse {
        message: "Product updated successfully".to_owned(),
        product: product.into(),
    }))
}

pub async fn delete(
    State(state): State<ApiState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    state.services.products.delete_product(id).await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
