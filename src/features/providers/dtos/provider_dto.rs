use serde::{Deserialize, Serialize};

use crate::features::providers::models::Provider;

/// Raw registration form fields. Everything arrives as text; trimming is the
/// only normalization applied before the payment gate.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegisterProviderForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub transaction_id: String,
}

impl RegisterProviderForm {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            contact: self.contact.trim().to_string(),
            city: self.city.trim().to_string(),
            price_range: self.price_range.trim().to_string(),
            transaction_id: self.transaction_id.trim().to_string(),
        }
    }

    pub fn into_new_provider(self) -> NewProvider {
        NewProvider {
            name: self.name,
            category: self.category,
            description: none_if_empty(self.description),
            contact: self.contact,
            city: self.city,
            price_range: none_if_empty(self.price_range),
            transaction_id: self.transaction_id,
        }
    }
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Insert payload for a new provider row
#[derive(Debug, Clone)]
pub struct NewProvider {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub contact: String,
    pub city: String,
    pub price_range: Option<String>,
    pub transaction_id: String,
}

/// Query params for the search page
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub city: String,
}

/// Template-facing view of a provider, with a human-readable creation date
#[derive(Debug, Clone, Serialize)]
pub struct ProviderView {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub contact: String,
    pub city: String,
    pub price_range: Option<String>,
    pub rating: Option<f64>,
    pub approved: bool,
    pub transaction_id: Option<String>,
    pub created_label: String,
}

impl From<Provider> for ProviderView {
    fn from(p: Provider) -> Self {
        Self {
            id: p.id,
            name: p.name,
            category: p.category,
            description: p.description,
            contact: p.contact,
            city: p.city,
            price_range: p.price_range,
            rating: p.rating,
            approved: p.approved,
            transaction_id: p.transaction_id,
            created_label: p.created_at.format("%d %b %Y").to_string(),
        }
    }
}
