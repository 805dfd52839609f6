use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use tracing::field::Empty;

use crate::api::rest::dto::{AuthResponse, LoginReq, RegisterReq, UserDto};
use crate::api::rest::error::ApiResult;
use crate::api::rest::extract::ValidJson;
use crate::api::rest::guards::Principal;
use crate::api::rest::routes::ApiState;

#[tracing::instrument(skip(state, req), fields(user.id = Empty))]
pub async fn register(
    State(state): State<ApiState>,
    ValidJson(req): ValidJson<RegisterReq>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let session = state.services.auth.register(req.into()).await?;
    tracing::Span::current().record("user.id", tracing::field::display(session.user.id));

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_owned(),
            user: session.user.into(),
            access_token: session.access_token,
        }),
    ))
}

#[tracing::instrument(skip(state, req))]
pub async fn login(
    State(state): State<ApiState>,
    ValidJson(req): ValidJson<LoginReq>,
) -> ApiResult<Json<AuthResponse>> {
    let session = state.services.auth.login(&req.email, &req.password).await?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_owned(),
        user: session.user.into(),
        access_token: session.access_token,
    }))
}

pub async fn profile(Extension(principal): Extension<Principal>) -> Json<UserDto> {
    Json(principal.0.into())
}
