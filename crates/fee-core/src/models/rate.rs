//! Rate card model
//!
//! One rate entry per category key. The table is read in full before every
//! quote, so it is kept as an ordered map keyed by rate key.

use super::Category;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rate entry for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    /// Unique key (e.g. "rough_video")
    pub key: String,

    /// Human-readable label, copied onto saved projects
    pub label: String,

    /// Price of the first minute, in whole Rupiah
    pub base_price: i64,

    /// Price of every minute after the first, in whole Rupiah
    pub extra_per_minute: i64,
}

impl RateEntry {
    /// Create a rate entry
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        base_price: i64,
        extra_per_minute: i64,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            base_price,
            extra_per_minute,
        }
    }

    /// Check the entry before it is stored
    pub fn validate(&self) -> Result<(), AppError> {
        if self.key.trim().is_empty() {
            return Err(AppError::Validation("Rate key cannot be empty".to_string()));
        }
        if self.label.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "Rate {} must have a label",
                self.key
            )));
        }
        if self.base_price < 0 {
            return Err(AppError::Validation(format!(
                "Rate {}: base price cannot be negative",
                self.key
            )));
        }
        if self.extra_per_minute < 0 {
            return Err(AppError::Validation(format!(
                "Rate {}: extra per minute cannot be negative",
                self.key
            )));
        }
        Ok(())
    }

    /// The factory rate card
    pub fn defaults() -> Vec<RateEntry> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let (base_price, extra_per_minute) = match category {
                    Category::RoughAudio => (25_000, 5_000),
                    Category::RoughVideo => (40_000, 10_000),
                    Category::FullEdit => (100_000, 20_000),
                };
                RateEntry::new(
                    category.rate_key(),
                    category.default_label(),
                    base_price,
                    extra_per_minute,
                )
            })
            .collect()
    }
}

/// Snapshot of the rate card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    entries: BTreeMap<String, RateEntry>,
}

impl RateTable {
    /// Build a table from entries. A later entry replaces an earlier one with
    /// the same key.
    pub fn new(entries: impl IntoIterator<Item = RateEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.key.clone(), e)).collect(),
        }
    }

    /// Table holding the factory rate card
    pub fn with_defaults() -> Self {
        Self::new(RateEntry::defaults())
    }

    /// Look up the rate for a category
    pub fn get(&self, category: Category) -> Option<&RateEntry> {
        self.entries.get(category.rate_key())
    }

    /// Look up the rate for a category, failing when the card was never seeded
    pub fn require(&self, category: Category) -> Result<&RateEntry, AppError> {
        self.get(category)
            .ok_or_else(|| AppError::RateNotFound(category.rate_key().to_string()))
    }

    /// Categories without a rate entry
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.get(*c).is_none())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries ordered by key
    pub fn entries(&self) -> impl Iterator<Item = &RateEntry> {
        self.entries.values()
    }
}
