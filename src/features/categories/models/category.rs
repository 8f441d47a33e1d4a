use serde::Serialize;
use sqlx::FromRow;

/// Database model for a taxonomy category
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
