use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use minijinja::context;

use crate::core::error::Result;
use crate::features::admin::dtos::AdminActionForm;
use crate::features::admin::services::AdminService;
use crate::features::providers::dtos::ProviderView;
use crate::shared::templates;

/// Full moderation listing: pending and approved rows, newest first
pub async fn admin_index(State(service): State<Arc<AdminService>>) -> Result<Html<String>> {
    let providers: Vec<ProviderView> = service
        .list_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let html = templates::render("admin.html", context! { providers => providers })?;
    Ok(Html(html))
}

/// Apply a moderation action, then return to the listing.
///
/// Unknown actions and missing or unparsable ids fall through to the
/// redirect untouched; non-existent ids are no-ops inside the service.
pub async fn admin_action(
    State(service): State<Arc<AdminService>>,
    Form(form): Form<AdminActionForm>,
) -> Result<Redirect> {
    if let Some(id) = form.provider_id() {
        match form.action.as_deref() {
            Some("approve") => service.approve(id).await?,
            Some("unapprove") => service.unapprove(id).await?,
            Some("reject") => service.reject(id).await?,
            other => {
                tracing::debug!("Ignoring unknown admin action {:?} for provider {}", other, id);
            }
        }
    }

    Ok(Redirect::to("/admin"))
}
