//! Rate card management
//!
//! Updates are upserts keyed by rate key. A batch is applied entry by entry
//! without a transaction: the first failure stops it and the entries before
//! it stay written.

use fee_core::{models::RateEntry, traits::RateRepository, AppError, AppResult};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Rate card configuration service
pub struct RateConfigService<R: RateRepository> {
    rate_repo: Arc<R>,
}

impl<R: RateRepository> RateConfigService<R> {
    /// Create a new rate configuration service
    pub fn new(rate_repo: Arc<R>) -> Self {
        Self { rate_repo }
    }

    /// Current rate card, ordered by key
    pub async fn list(&self) -> AppResult<Vec<RateEntry>> {
        self.rate_repo.find_all().await
    }

    /// Validate every entry, then upsert them in order.
    ///
    /// Nothing is written when an entry is invalid. A storage failure stops
    /// the batch; earlier entries remain updated.
    #[instrument(skip(self, entries), fields(count = entries.len()))]
    pub async fn update_rates(&self, entries: Vec<RateEntry>) -> AppResult<Vec<RateEntry>> {
        if entries.is_empty() {
            return Err(AppError::InvalidInput("No rates submitted".to_string()));
        }
        for entry in &entries {
            entry.validate().map_err(|e| {
                warn!("Rejected rate {}: {}", entry.key, e);
                e
            })?;
        }

        let mut saved = Vec::with_capacity(entries.len());
        for entry in &entries {
            match self.rate_repo.upsert(entry).await {
                Ok(rate) => saved.push(rate),
                Err(e) => {
                    error!(
                        "Rate update stopped at {} after {} of {} entries: {}",
                        entry.key,
                        saved.len(),
                        entries.len(),
                        e
                    );
                    return Err(e);
                }
            }
        }

        info!("Updated {} rates", saved.len());
        Ok(saved)
    }

    /// Overwrite the default keys with their default values
    #[instrument(skip(self))]
    pub async fn reset_defaults(&self) -> AppResult<Vec<RateEntry>> {
        info!("Resetting rate card to defaults");
        self.update_rates(RateEntry::defaults()).await
    }

    /// Insert the defaults when the rate card is empty.
    ///
    /// Returns whether anything was written.
    #[instrument(skip(self))]
    pub async fn seed_defaults_if_empty(&self) -> AppResult<bool> {
        if self.rate_repo.count().await? > 0 {
            let missing = self.rate_repo.load_table().await?.missing();
            if !missing.is_empty() {
                warn!("Rate card has no entry for {:?}; quotes for them will fail", missing);
            }
            return Ok(false);
        }

        info!("Rate card is empty, seeding defaults");
        self.update_rates(RateEntry::defaults()).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRateRepository;

    #[tokio::test]
    async fn test_update_is_idempotent_upsert() {
        let repo = Arc::new(MockRateRepository::with(RateEntry::defaults()));
        let service = RateConfigService::new(repo.clone());
        let entry = RateEntry::new("rough_video", "Rough Cut (Video)", 45_000, 12_000);

        service.update_rates(vec![entry.clone()]).await.unwrap();
        service.update_rates(vec![entry.clone()]).await.unwrap();

        assert_eq!(repo.get("rough_video"), Some(entry));
        assert_eq!(service.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_new_key_is_inserted() {
        let repo = Arc::new(MockRateRepository::default());
        let service = RateConfigService::new(repo.clone());

        service
            .update_rates(vec![RateEntry::new("motion", "Motion Graphics", 150_000, 30_000)])
            .await
            .unwrap();

        assert_eq!(repo.get("motion").map(|r| r.base_price), Some(150_000));
    }

    #[tokio::test]
    async fn test_invalid_entry_writes_nothing() {
        let repo = Arc::new(MockRateRepository::with(RateEntry::defaults()));
        let service = RateConfigService::new(repo.clone());

        let err = service
            .update_rates(vec![
                RateEntry::new("rough_audio", "Rough Cut (Audio)", 1, 1),
                RateEntry::new("full_edit", "Full Editing", -5, 0),
            ])
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(repo.get("rough_audio").map(|r| r.base_price), Some(25_000));
    }

    #[tokio::test]
    async fn test_failure_keeps_earlier_entries() {
        let repo = Arc::new(MockRateRepository {
            failing_key: Some("rough_video".to_string()),
            ..MockRateRepository::with(RateEntry::defaults())
        });
        let service = RateConfigService::new(repo.clone());

        let result = service
            .update_rates(vec![
                RateEntry::new("rough_audio", "Rough Cut (Audio)", 30_000, 6_000),
                RateEntry::new("rough_video", "Rough Cut (Video)", 50_000, 11_000),
                RateEntry::new("full_edit", "Full Editing", 120_000, 25_000),
            ])
            .await;

        assert!(result.is_err());
        assert_eq!(repo.get("rough_audio").map(|r| r.base_price), Some(30_000));
        assert_eq!(repo.get("rough_video").map(|r| r.base_price), Some(40_000));
        assert_eq!(repo.get("full_edit").map(|r| r.base_price), Some(100_000));
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let repo = Arc::new(MockRateRepository::with(vec![
            RateEntry::new("rough_audio", "Audio only", 1, 1),
            RateEntry::new("full_edit", "Everything", 2, 2),
        ]));
        let service = RateConfigService::new(repo.clone());

        service.reset_defaults().await.unwrap();

        for default in RateEntry::defaults() {
            assert_eq!(repo.get(&default.key), Some(default));
        }
    }

    #[tokio::test]
    async fn test_seed_only_when_empty() {
        let empty = Arc::new(MockRateRepository::default());
        let service = RateConfigService::new(empty.clone());
        assert!(service.seed_defaults_if_empty().await.unwrap());
        assert_eq!(empty.count().await.unwrap(), 3);

        let custom = RateEntry::new("rough_audio", "Custom", 1, 1);
        let populated = Arc::new(MockRateRepository::with(vec![custom.clone()]));
        let service = RateConfigService::new(populated.clone());
        assert!(!service.seed_defaults_if_empty().await.unwrap());
        assert_eq!(populated.count().await.unwrap(), 1);
        assert_eq!(populated.get("rough_audio"), Some(custom));
    }
}
