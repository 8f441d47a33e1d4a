use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Database model for a provider listing.
///
/// `category` is a plain string copy of a category name, not a foreign key;
/// `rating` is reserved for a later phase and is never written by any route.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Provider {
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
    pub created_at: DateTime<Utc>,
}
