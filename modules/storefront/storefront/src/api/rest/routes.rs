use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{MethodRouter, get, post, put};
use storefront_auth::TokenValidator;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::error::Problem;
use super::{guards, handlers};
use crate::module::ConcreteAppServices;

/// Shared handler and guard state.
#[derive(Clone)]
pub struct ApiState {
    pub(super) services: Arc<ConcreteAppServices>,
    pub(super) tokens: Arc<dyn TokenValidator>,
}

impl ApiState {
    pub fn new(services: Arc<ConcreteAppServices>, tokens: Arc<dyn TokenValidator>) -> Self {
        Self { services, tokens }
    }
}

fn authenticated(route: MethodRouter<ApiState>, state: &ApiState) -> MethodRouter<ApiState> {
    route.route_layer(from_fn_with_state(state.clone(), guards::require_auth))
}

/// Admin check runs after authentication: the outer layer executes first.
fn admin_only(route: MethodRouter<ApiState>, state: &ApiState) -> MethodRouter<ApiState> {
    authenticated(route.route_layer(from_fn(guards::require_admin)), state)
}

/// Turns a handler panic into a 500 problem instead of dropping the connection.
#[allow(clippy::needless_pass_by_value)]
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    tracing::error!(panic = %detail, "Request handler panicked");
    Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        // auth
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/auth/profile",
            authenticated(get(handlers::auth::profile), &state),
        )
        // products
        .route(
            "/products",
            get(handlers::products::list)
                .merge(admin_only(post(handlers::products::create), &state)),
        )
        .route("/products/categories", get(handlers::products::categories))
        .route(
            "/products/{id}",
            get(handlers::products::get).merge(admin_only(
                put(handlers::products::update)
                    .delete(handlers::products::delete),
                &state,
            )),
        )
        // orders
        .route(
            "/orders",
            authenticated(
                post(handlers::orders::create).get(handlers::orders::list_mine),
                &state,
            ),
        )
        .route(
            "/orders/all",
            admin_only(get(handlers::orders::list_all), &state),
        )
        .route(
            "/orders/stats",
            admin_only(get(handlers::orders::stats), &state),
        )
        .route(
            "/orders/{id}",
            authenticated(get(handlers::orders::get), &state),
        )
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
