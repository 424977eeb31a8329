//! Fee quote DTOs

use fee_core::invoice::format_idr;
use fee_core::models::{Category, ConditionSet, MainCategory, MediaType};
use fee_core::{FeeQuote, FeeRequest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Calculator input
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// "rough" or "full"
    pub main_category: MainCategory,

    /// "audio" or "video"; only read for rough cuts
    #[serde(default)]
    pub media_type: MediaType,

    /// Duration in minutes, at least 1
    pub duration: Decimal,

    /// Surcharge flags
    #[serde(default)]
    pub conditions: ConditionSet,
}

impl QuoteRequest {
    /// Category selected by the main category and media type
    pub fn category(&self) -> Category {
        Category::from_selection(self.main_category, self.media_type)
    }

    /// Core fee request
    pub fn to_fee_request(&self) -> FeeRequest {
        FeeRequest {
            category: self.category(),
            duration_minutes: self.duration,
            conditions: self.conditions,
        }
    }
}

/// Calculator output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub quote: FeeQuote,
    /// Total in IDR notation, e.g. "Rp 234.000"
    pub total_formatted: String,
}

impl From<FeeQuote> for QuoteResponse {
    fn from(quote: FeeQuote) -> Self {
        Self {
            total_formatted: format_idr(quote.total),
            quote,
        }
    }
}
