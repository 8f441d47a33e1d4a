use chrono::Utc;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::providers::dtos::NewProvider;
use crate::features::providers::models::Provider;

const PROVIDER_COLUMNS: &str = "id, name, category, description, contact, city, price_range, \
                                rating, approved, transaction_id, created_at";

/// Service for provider listing reads and the registration insert
pub struct ProviderService {
    pool: SqlitePool,
}

impl ProviderService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new listing. Rows always start out unapproved; only an
    /// explicit admin action can flip the flag.
    pub async fn create(&self, new: NewProvider) -> Result<Provider> {
        let provider = sqlx::query_as::<_, Provider>(&format!(
            "INSERT INTO providers \
                 (name, category, description, contact, city, price_range, approved, transaction_id, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, 0, ?, ?) \
             RETURNING {PROVIDER_COLUMNS}"
        ))
        .bind(&new.name)
        .bind(&new.category)
        .bind(&new.description)
        .bind(&new.contact)
        .bind(&new.city)
        .bind(&new.price_range)
        .bind(&new.transaction_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert provider: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Provider registered: id={}, category={}, pending approval",
            provider.id,
            provider.category
        );

        Ok(provider)
    }

    /// The newest approved listings for the home page
    pub async fn latest_approved(&self, limit: i64) -> Result<Vec<Provider>> {
        let providers = sqlx::query_as::<_, Provider>(&format!(
            "SELECT {PROVIDER_COLUMNS} FROM providers \
             WHERE approved = 1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load latest providers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(providers)
    }

    /// Search approved listings. Empty filter values impose no filter;
    /// category matches exactly, city matches as a case-insensitive
    /// substring (SQLite LIKE).
    pub async fn search(&self, category: &str, city: &str) -> Result<Vec<Provider>> {
        let providers = sqlx::query_as::<_, Provider>(&format!(
            "SELECT {PROVIDER_COLUMNS} FROM providers \
             WHERE approved = 1 \
               AND (?1 = '' OR category = ?1) \
               AND (?2 = '' OR city LIKE '%' || ?2 || '%') \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(category)
        .bind(city)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search providers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(providers)
    }

    /// Look up a single listing by primary key
    pub async fn get(&self, id: i64) -> Result<Provider> {
        let provider = sqlx::query_as::<_, Provider>(&format!(
            "SELECT {PROVIDER_COLUMNS} FROM providers WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get provider {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        provider.ok_or_else(|| AppError::NotFound(format!("Provider {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::providers::dtos::NewProvider;

    async fn setup_pool() -> SqlitePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    fn listing(name: &str, category: &str, city: &str) -> NewProvider {
        NewProvider {
            name: name.to_string(),
            category: category.to_string(),
            description: None,
            contact: "0300-0000000".to_string(),
            city: city.to_string(),
            price_range: None,
            transaction_id: "TX-1".to_string(),
        }
    }

    async fn approve(pool: &SqlitePool, id: i64) {
        sqlx::query("UPDATE providers SET approved = 1 WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn created_rows_start_unapproved() {
        let service = ProviderService::new(setup_pool().await);

        let p = service
            .create(listing("Ali Plumbing", "Plumber", "Karachi"))
            .await
            .unwrap();

        assert!(!p.approved);
        assert_eq!(p.transaction_id.as_deref(), Some("TX-1"));
        assert!(service.latest_approved(6).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_filters_by_category_and_city_substring() {
        let pool = setup_pool().await;
        let service = ProviderService::new(pool.clone());

        let a = service
            .create(listing("Ali Plumbing", "Plumber", "Karachi"))
            .await
            .unwrap();
        let b = service
            .create(listing("North Fixers", "Plumber", "North Karachi"))
            .await
            .unwrap();
        let c = service
            .create(listing("Lahore Wires", "Electrician", "Lahore"))
            .await
            .unwrap();
        for p in [&a, &b, &c] {
            approve(&pool, p.id).await;
        }

        // Case-insensitive substring on city
        let found = service.search("", "karachi").await.unwrap();
        let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["North Fixers", "Ali Plumbing"]);

        // Exact category match
        let found = service.search("Plumber", "").await.unwrap();
        assert_eq!(found.len(), 2);
        let found = service.search("Plumb", "").await.unwrap();
        assert!(found.is_empty());

        // Empty filters return every approved row, newest first
        let found = service.search("", "").await.unwrap();
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].id, c.id);
    }

    #[tokio::test]
    async fn search_never_returns_unapproved_rows() {
        let pool = setup_pool().await;
        let service = ProviderService::new(pool.clone());

        let pending = service
            .create(listing("Pending Co", "Cleaner", "Karachi"))
            .await
            .unwrap();

        assert!(service.search("", "").await.unwrap().is_empty());
        assert!(service.search("Cleaner", "karachi").await.unwrap().is_empty());

        approve(&pool, pending.id).await;
        assert_eq!(service.search("", "").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn latest_approved_caps_at_limit_newest_first() {
        let pool = setup_pool().await;
        let service = ProviderService::new(pool.clone());

        let mut ids = Vec::new();
        for i in 0..8 {
            let p = service
                .create(listing(&format!("Listing {i}"), "Tutor", "Multan"))
                .await
                .unwrap();
            approve(&pool, p.id).await;
            ids.push(p.id);
        }

        let latest = service.latest_approved(6).await.unwrap();
        assert_eq!(latest.len(), 6);
        assert_eq!(latest[0].id, *ids.last().unwrap());
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let service = ProviderService::new(setup_pool().await);
        let err = service.get(4242).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
