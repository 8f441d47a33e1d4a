//! HTML template rendering for the server-rendered pages.
//!
//! Templates are compiled into the binary and loaded into a single
//! minijinja environment on first use.

use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    (
        "search_results.html",
        include_str!("../../templates/search_results.html"),
    ),
    (
        "provider_register.html",
        include_str!("../../templates/provider_register.html"),
    ),
    (
        "provider_detail.html",
        include_str!("../../templates/provider_detail.html"),
    ),
    ("thankyou.html", include_str!("../../templates/thankyou.html")),
    ("admin.html", include_str!("../../templates/admin.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        env.add_template(name, source)
            .expect("embedded template is valid");
    }
    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a page template with the given context.
pub fn render(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn unknown_template_is_not_found() {
        let result = render("definitely_not_a_real_template.html", context! {});
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn error_page_renders_status_and_message() {
        let html = render(
            "error.html",
            context! { status => 404, message => "Provider not found" },
        )
        .unwrap();
        assert!(html.contains("404"));
        assert!(html.contains("Provider not found"));
    }
}
