use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::providers::models::Provider;

/// Service for moderation over provider rows
pub struct AdminService {
    pool: SqlitePool,
}

impl AdminService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every listing, approved and pending, newest first. This is the only
    /// surface where unapproved rows are visible.
    pub async fn list_all(&self) -> Result<Vec<Provider>> {
        let providers = sqlx::query_as::<_, Provider>(
            "SELECT id, name, category, description, contact, city, price_range, \
                    rating, approved, transaction_id, created_at \
             FROM providers \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list providers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(providers)
    }

    /// Mark a listing approved. Idempotent; unknown ids affect nothing.
    pub async fn approve(&self, id: i64) -> Result<()> {
        let result = sqlx::query("UPDATE providers SET approved = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() > 0 {
            tracing::info!("Provider {} approved", id);
        }
        Ok(())
    }

    /// Pull a listing back out of public view. Idempotent.
    pub async fn unapprove(&self, id: i64) -> Result<()> {
        let result = sqlx::query("UPDATE providers SET approved = 0 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() > 0 {
            tracing::info!("Provider {} unapproved", id);
        }
        Ok(())
    }

    /// Permanently delete a listing, whatever its state. No soft delete.
    pub async fn reject(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM providers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() > 0 {
            tracing::info!("Provider {} rejected and deleted", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::providers::dtos::NewProvider;
    use crate::features::providers::services::ProviderService;

    async fn setup() -> (AdminService, ProviderService) {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        (AdminService::new(pool.clone()), ProviderService::new(pool))
    }

    fn listing(name: &str) -> NewProvider {
        NewProvider {
            name: name.to_string(),
            category: "Painter".to_string(),
            description: None,
            contact: "0300-0000000".to_string(),
            city: "Hyderabad".to_string(),
            price_range: None,
            transaction_id: "TX-7".to_string(),
        }
    }

    #[tokio::test]
    async fn approve_is_idempotent() {
        let (admin, providers) = setup().await;
        let p = providers.create(listing("Fresh Coats")).await.unwrap();

        admin.approve(p.id).await.unwrap();
        assert!(providers.get(p.id).await.unwrap().approved);

        // Second approval succeeds and leaves the flag set
        admin.approve(p.id).await.unwrap();
        assert!(providers.get(p.id).await.unwrap().approved);
    }

    #[tokio::test]
    async fn unapprove_returns_listing_to_pending() {
        let (admin, providers) = setup().await;
        let p = providers.create(listing("Fresh Coats")).await.unwrap();

        admin.approve(p.id).await.unwrap();
        admin.unapprove(p.id).await.unwrap();
        assert!(!providers.get(p.id).await.unwrap().approved);

        admin.unapprove(p.id).await.unwrap();
        assert!(!providers.get(p.id).await.unwrap().approved);
    }

    #[tokio::test]
    async fn reject_deletes_permanently() {
        let (admin, providers) = setup().await;
        let p = providers.create(listing("Fresh Coats")).await.unwrap();

        admin.reject(p.id).await.unwrap();

        let err = providers.get(p.id).await.unwrap_err();
        assert!(matches!(err, crate::core::error::AppError::NotFound(_)));
        assert!(admin.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn actions_on_unknown_ids_are_noops() {
        let (admin, _providers) = setup().await;

        admin.approve(999).await.unwrap();
        admin.unapprove(999).await.unwrap();
        admin.reject(999).await.unwrap();
    }

    #[tokio::test]
    async fn list_all_includes_pending_rows() {
        let (admin, providers) = setup().await;
        let a = providers.create(listing("First")).await.unwrap();
        let b = providers.create(listing("Second")).await.unwrap();
        admin.approve(a.id).await.unwrap();

        let all = admin.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        // Newest first
        assert_eq!(all[0].id, b.id);
        assert!(!all[0].approved);
        assert!(all[1].approved);
    }
}
