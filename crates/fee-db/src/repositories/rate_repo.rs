//! Rate card repository implementation
//!
//! Rate entries are keyed by category key; writes are upserts.

use async_trait::async_trait;
use fee_core::{models::RateEntry, traits::RateRepository, AppError, AppResult};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, instrument};

/// Database row representation of a rate entry
#[derive(Debug, FromRow)]
struct RateRow {
    key: String,
    label: String,
    base_price: i64,
    extra_per_minute: i64,
}

impl From<RateRow> for RateEntry {
    fn from(row: RateRow) -> Self {
        RateEntry {
            key: row.key,
            label: row.label,
            base_price: row.base_price,
            extra_per_minute: row.extra_per_minute,
        }
    }
}

/// PostgreSQL implementation of RateRepository
pub struct PgRateRepository {
    pool: PgPool,
}

impl PgRateRepository {
    /// Create a new rate repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RateRepository for PgRateRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> AppResult<Vec<RateEntry>> {
        debug!("Loading rate card");

        let rows = sqlx::query_as::<sqlx::Postgres, RateRow>(
            r#"
            SELECT key, label, base_price, extra_per_minute
            FROM rates
            ORDER BY key
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error loading rates: {}", e);
            AppError::Database(format!("Failed to load rates: {}", e))
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn upsert(&self, rate: &RateEntry) -> AppResult<RateEntry> {
        debug!("Upserting rate: {}", rate.key);

        let row = sqlx::query_as::<sqlx::Postgres, RateRow>(
            r#"
            INSERT INTO rates (key, label, base_price, extra_per_minute)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (key) DO UPDATE
            SET label = EXCLUDED.label,
                base_price = EXCLUDED.base_price,
                extra_per_minute = EXCLUDED.extra_per_minute,
                updated_at = NOW()
            RETURNING key, label, base_price, extra_per_minute
            "#,
        )
        .bind(&rate.key)
        .bind(&rate.label)
        .bind(rate.base_price)
        .bind(rate.extra_per_minute)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error upserting rate {}: {}", rate.key, e);
            AppError::Database(format!("Failed to save rate {}: {}", rate.key, e))
        })?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> AppResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM rates")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error counting rates: {}", e);
                AppError::Database(format!("Failed to count rates: {}", e))
            })?;

        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_row_conversion() {
        let row = RateRow {
            key: "rough_video".to_string(),
            label: "Rough Cut (Video)".to_string(),
            base_price: 40_000,
            extra_per_minute: 10_000,
        };

        let rate: RateEntry = row.into();
        assert_eq!(rate, RateEntry::new("rough_video", "Rough Cut (Video)", 40_000, 10_000));
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_upsert_is_idempotent() {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgresql://localhost/editor_fee".to_string());
        let pool = PgPool::connect(&database_url).await.unwrap();
        crate::run_migrations(&pool).await.unwrap();
        let repo = PgRateRepository::new(pool);

        let entry = RateEntry::new("test_key", "Test", 1_000, 100);
        repo.upsert(&entry).await.unwrap();
        let before = repo.count().await.unwrap();
        let saved = repo.upsert(&entry).await.unwrap();

        assert_eq!(saved, entry);
        assert_eq!(repo.count().await.unwrap(), before);
    }
}
