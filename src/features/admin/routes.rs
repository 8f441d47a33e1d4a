use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::admin::handlers;
use crate::features::admin::services::AdminService;

/// Create routes for the admin moderation surface.
///
/// The caller decides whether to wrap these in the Basic-auth guard; with no
/// credentials configured they are served open (Phase-1 behavior).
pub fn routes(service: Arc<AdminService>) -> Router {
    Router::new()
        .route(
            "/admin",
            get(handlers::admin_index).post(handlers::admin_action),
        )
        .with_state(service)
}
