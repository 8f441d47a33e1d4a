use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use minijinja::context;

use crate::core::config::PaymentConfig;
use crate::core::error::Result;
use crate::features::categories::services::CategoryService;
use crate::features::providers::dtos::{ProviderView, RegisterProviderForm, SearchQuery};
use crate::features::providers::services::{PaymentVerifier, ProviderService};
use crate::shared::constants::LATEST_LISTINGS_LIMIT;
use crate::shared::templates;

/// Shared state for the public pages
#[derive(Clone)]
pub struct PagesState {
    pub providers: Arc<ProviderService>,
    pub categories: Arc<CategoryService>,
    pub payment_verifier: Arc<dyn PaymentVerifier>,
    pub payment: PaymentConfig,
}

/// Home page: all categories alphabetically plus the newest approved listings
pub async fn index(State(state): State<PagesState>) -> Result<Html<String>> {
    let categories = state.categories.list().await?;
    let latest: Vec<ProviderView> = state
        .providers
        .latest_approved(LATEST_LISTINGS_LIMIT)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let html = templates::render(
        "index.html",
        context! {
            categories => categories,
            latest_providers => latest,
        },
    )?;
    Ok(Html(html))
}

/// Search approved listings by category (exact) and city (substring)
pub async fn search(
    State(state): State<PagesState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>> {
    let category = query.category.trim();
    let city = query.city.trim();

    let providers: Vec<ProviderView> = state
        .providers
        .search(category, city)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let html = templates::render(
        "search_results.html",
        context! {
            providers => providers,
            category => category,
            city => city,
        },
    )?;
    Ok(Html(html))
}

/// Empty registration form
pub async fn register_form(State(state): State<PagesState>) -> Result<Html<String>> {
    let categories = state.categories.list().await?;

    let html = templates::render(
        "provider_register.html",
        context! {
            categories => categories,
            form => RegisterProviderForm::default(),
            payment => state.payment,
        },
    )?;
    Ok(Html(html))
}

/// Attempt to create a listing. The only gate is that a transaction id was
/// entered; without one the form is redisplayed with the submitted values
/// preserved and no row is written.
pub async fn register_submit(
    State(state): State<PagesState>,
    Form(form): Form<RegisterProviderForm>,
) -> Result<Response> {
    let submission = form.trimmed();

    if !state
        .payment_verifier
        .verify(&submission.transaction_id)
        .await?
    {
        let categories = state.categories.list().await?;
        let html = templates::render(
            "provider_register.html",
            context! {
                categories => categories,
                form => submission,
                payment => state.payment,
                error => format!(
                    "Please pay Rs. {} via EasyPaisa to {} and enter the transaction ID.",
                    state.payment.amount_rupees, state.payment.receiver_number
                ),
            },
        )?;
        return Ok(Html(html).into_response());
    }

    state
        .providers
        .create(submission.into_new_provider())
        .await?;

    Ok(Redirect::to("/thankyou").into_response())
}

/// Static confirmation page shown after a successful submission
pub async fn thankyou() -> Result<Html<String>> {
    let html = templates::render("thankyou.html", context! {})?;
    Ok(Html(html))
}

/// Single listing by primary key; 404 when the id is unknown
pub async fn provider_detail(
    State(state): State<PagesState>,
    Path(id): Path<i64>,
) -> Result<Html<String>> {
    let provider: ProviderView = state.providers.get(id).await?.into();

    let html = templates::render("provider_detail.html", context! { p => provider })?;
    Ok(Html(html))
}
