pub mod core;
pub mod features;
pub mod shared;

use std::sync::Arc;

use axum::{middleware::from_fn, Router};
use sqlx::SqlitePool;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::config::{AdminConfig, PaymentConfig};
use crate::core::middleware;
use crate::features::admin::{routes as admin_routes, AdminService};
use crate::features::categories::CategoryService;
use crate::features::providers::{
    routes as provider_routes, ManualReceiptVerifier, PagesState, ProviderService,
};

/// Build the application router. All services hang off the given pool; no
/// global state, so tests can stand up an isolated instance per case.
pub fn app(pool: SqlitePool, payment: PaymentConfig, admin: AdminConfig) -> Router {
    let pages_state = PagesState {
        providers: Arc::new(ProviderService::new(pool.clone())),
        categories: Arc::new(CategoryService::new(pool.clone())),
        payment_verifier: Arc::new(ManualReceiptVerifier),
        payment,
    };

    let admin_service = Arc::new(AdminService::new(pool));
    let admin_router = if let Some(credentials) = admin.credentials() {
        tracing::info!("Admin basic auth enabled");
        admin_routes::routes(admin_service).layer(from_fn(middleware::basic_auth_middleware(
            Arc::new(credentials),
        )))
    } else {
        tracing::info!("Admin basic auth disabled (no credentials configured)");
        admin_routes::routes(admin_service)
    };

    Router::new()
        .merge(provider_routes::routes(pages_state))
        .merge(admin_router)
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
