use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::shared::constants::DEFAULT_CATEGORIES;

/// Service for category lookups and the one-time seed step
pub struct CategoryService {
    pool: SqlitePool,
}

impl CategoryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories, ordered alphabetically
    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to list categories: {:?}", e);
                    AppError::Database(e)
                })?;

        Ok(categories)
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(count)
    }

    /// Insert the fixed default categories iff the table is empty.
    ///
    /// All rows go in as a single transaction so a crash mid-seed cannot
    /// leave a partial list behind. Returns whether seeding happened.
    pub async fn seed_defaults(&self) -> Result<bool> {
        if self.count().await? > 0 {
            return Ok(false);
        }

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        for name in DEFAULT_CATEGORIES {
            sqlx::query("INSERT INTO categories (name) VALUES (?)")
                .bind(name)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to seed category '{}': {:?}", name, e);
                    AppError::Database(e)
                })?;
        }
        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!("Seeded {} default categories", DEFAULT_CATEGORIES.len());
        Ok(true)
    }
}
