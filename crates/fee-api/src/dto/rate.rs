//! Rate card DTOs
//!
//! The rate card travels as an object keyed by rate key:
//! `{ "full_edit": { "label": ..., "basePrice": ..., "extraPerMinute": ... } }`.

use super::common::deserialize_amount;
use fee_core::models::RateEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// One rate card entry without its key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RateValue {
    /// Human-readable label
    #[validate(length(min = 1, max = 100, message = "Rate label is required"))]
    pub label: String,

    /// Price of the first minute
    #[serde(deserialize_with = "deserialize_amount")]
    #[validate(range(min = 0, message = "Base price cannot be negative"))]
    pub base_price: i64,

    /// Price of each further minute
    #[serde(deserialize_with = "deserialize_amount")]
    #[validate(range(min = 0, message = "Extra per minute cannot be negative"))]
    pub extra_per_minute: i64,
}

/// Rate card keyed by rate key
pub type RateCardBody = BTreeMap<String, RateValue>;

/// Key the stored entries
pub fn rate_card_body(entries: Vec<RateEntry>) -> RateCardBody {
    entries
        .into_iter()
        .map(|e| {
            (
                e.key,
                RateValue {
                    label: e.label,
                    base_price: e.base_price,
                    extra_per_minute: e.extra_per_minute,
                },
            )
        })
        .collect()
}

/// Validate every value and turn the body into entries, in key order
pub fn rate_entries(body: RateCardBody) -> Result<Vec<RateEntry>, String> {
    body.into_iter()
        .map(|(key, value)| {
            value
                .validate()
                .map_err(|e| format!("Rate {}: {}", key, e))?;
            Ok(RateEntry::new(
                key,
                value.label,
                value.base_price,
                value.extra_per_minute,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_round_trips_through_entries() {
        let body = rate_card_body(RateEntry::defaults());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["full_edit"]["basePrice"], 100_000);
        assert_eq!(json["rough_audio"]["extraPerMinute"], 5_000);

        let entries = rate_entries(body).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.contains(&RateEntry::new("full_edit", "Full Editing", 100_000, 20_000)));
    }

    #[test]
    fn test_string_amounts_are_accepted() {
        let body: RateCardBody = serde_json::from_str(
            r#"{"rough_video": {"label": "Video", "basePrice": "45000", "extraPerMinute": 9000}}"#,
        )
        .unwrap();
        let entries = rate_entries(body).unwrap();
        assert_eq!(entries[0].base_price, 45_000);
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let body: RateCardBody = serde_json::from_str(
            r#"{"rough_video": {"label": "Video", "basePrice": -1, "extraPerMinute": 0}}"#,
        )
        .unwrap();
        assert!(rate_entries(body).is_err());
    }
}
