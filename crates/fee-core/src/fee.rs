//! Fee calculation
//!
//! ```text
//! duration_cost    = (minutes - 1) * extra_per_minute      (0 when minutes == 1)
//! subtotal         = base_price + duration_cost
//! multiplier_total = subtotal * Σ applied percentage surcharges
//! addons           = Σ applied flat surcharges
//! total            = subtotal + multiplier_total + addons
//! ```
//!
//! Everything is carried in exact decimal arithmetic and rounded to whole
//! Rupiah only when the quote is emitted. The total is rounded once; the
//! breakdown is then made to add up to it exactly.

use crate::error::AppError;
use crate::models::{Category, ConditionSet, RateTable};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Shortest billable duration, in minutes
pub const MIN_DURATION_MINUTES: Decimal = Decimal::ONE;

/// What to quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeRequest {
    pub category: Category,
    pub duration_minutes: Decimal,
    pub conditions: ConditionSet,
}

/// Itemized fee, in whole Rupiah
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    /// Base price of the category
    pub base: i64,
    /// Overage for minutes beyond the first
    pub duration_cost: i64,
    /// Sum of the percentage surcharges
    pub multiplier_total: i64,
    /// Sum of the flat surcharges
    pub addons: i64,
}

impl FeeBreakdown {
    /// Sum of all items
    pub fn total(&self) -> i64 {
        self.base + self.duration_cost + self.multiplier_total + self.addons
    }
}

/// Result of a fee calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuote {
    pub category: Category,
    /// Label of the rate entry used
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub duration_minutes: Decimal,
    /// Applied percentage, as a fraction (0.80 = +80%)
    #[serde(with = "rust_decimal::serde::float")]
    pub multiplier_rate: Decimal,
    pub breakdown: FeeBreakdown,
    pub total: i64,
    /// Tags of the applied conditions
    pub tags: Vec<String>,
}

/// Compute the fee for `request` against the rate card.
///
/// # Errors
///
/// * `AppError::Validation` when the duration is under one minute
/// * `AppError::RateNotFound` when the category has no rate entry
/// * `AppError::InvalidInput` when the fee does not fit in whole Rupiah
pub fn calculate_fee(request: &FeeRequest, rates: &RateTable) -> Result<FeeQuote, AppError> {
    let minutes = request.duration_minutes;
    if minutes < MIN_DURATION_MINUTES {
        return Err(AppError::Validation(format!(
            "Duration must be at least {} minute, got {}",
            MIN_DURATION_MINUTES, minutes
        )));
    }

    let category = request.category;
    let rate = rates.require(category)?;

    let out_of_range = || AppError::InvalidInput(format!("Fee out of range for {} min", minutes));

    let base = Decimal::from(rate.base_price);
    let duration_cost = if minutes > MIN_DURATION_MINUTES {
        (minutes - MIN_DURATION_MINUTES)
            .checked_mul(Decimal::from(rate.extra_per_minute))
            .ok_or_else(out_of_range)?
    } else {
        Decimal::ZERO
    };
    let subtotal = base.checked_add(duration_cost).ok_or_else(out_of_range)?;

    let multiplier_rate = request.conditions.multiplier_rate(category);
    let multiplier_total = subtotal
        .checked_mul(multiplier_rate)
        .ok_or_else(out_of_range)?;
    let addons = request.conditions.flat_addons(category);

    let exact_total = subtotal
        .checked_add(multiplier_total)
        .and_then(|t| t.checked_add(Decimal::from(addons)))
        .ok_or_else(out_of_range)?;
    let total = to_rupiah(exact_total)?;
    let duration_cost = to_rupiah(duration_cost)?;

    // Rounding residue lands in the multiplier item so the items sum to the total.
    let breakdown = FeeBreakdown {
        base: rate.base_price,
        duration_cost,
        multiplier_total: total - rate.base_price - duration_cost - addons,
        addons,
    };

    Ok(FeeQuote {
        category,
        label: rate.label.clone(),
        duration_minutes: minutes,
        multiplier_rate,
        breakdown,
        total,
        tags: request.conditions.tags(category),
    })
}

/// Round to whole Rupiah, half away from zero
fn to_rupiah(amount: Decimal) -> Result<i64, AppError> {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| AppError::InvalidInput(format!("Fee out of range: {}", amount)))
}
