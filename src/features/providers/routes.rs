use axum::{routing::get, Router};

use crate::features::providers::handlers::{self, PagesState};

/// Create routes for the public pages (home, search, registration, detail)
pub fn routes(state: PagesState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/search", get(handlers::search))
        .route(
            "/provider/register",
            get(handlers::register_form).post(handlers::register_submit),
        )
        .route("/thankyou", get(handlers::thankyou))
        .route("/provider/{id}", get(handlers::provider_detail))
        .with_state(state)
}
