use crate::api::auth::auth::{login, logout, me, refresh};
use crate::api::businesses::businesses::{create_business, get_business, list_businesses};
use crate::api::lockers::lockers::{
    create_locker, delete_locker, get_locker, list_lockers, update_locker,
};
use crate::api::members::members::{
    create_member, delete_member, get_member, list_members, update_member,
};
use crate::api::products::products::{
    create_product, delete_product, get_product, list_products, update_product,
};
use crate::middleware::{authenticate, authorize, request_path, tenant};
use crate::state::AppState;
use crate::health;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints.
///
/// Request traversal order: CORS -> error-path boundary -> authentication ->
/// authorization -> tenant resolution -> handler. The tenant scope opened by
/// the tenant middleware closes when the response leaves it, on every path.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Auth endpoints
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/refresh", post(refresh))
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/auth/me", get(me))
        // Tenant administration (owner only)
        .route("/api/v1/businesses", get(list_businesses).post(create_business))
        .route("/api/v1/businesses/{id}", get(get_business))
        // Tenant-scoped domain resources
        .route("/api/v1/members", get(list_members).post(create_member))
        .route(
            "/api/v1/members/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route("/api/v1/products", get(list_products).post(create_product))
        .route(
            "/api/v1/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/v1/lockers", get(list_lockers).post(create_locker))
        .route(
            "/api/v1/lockers/{id}",
            get(get_locker).put(update_locker).delete(delete_locker),
        )
        // Middleware: first layer added runs closest to the handler
        .layer(middleware::from_fn(tenant::resolve_tenant))
        .layer(middleware::from_fn(authorize::authorize))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            authenticate::authenticate,
        ))
        .layer(middleware::from_fn(request_path::stamp_error_path))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
