//! Expense summary shown on the dashboard

use crate::models::{Project, YearMonth};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of projects listed as recent
pub const RECENT_PROJECTS: usize = 5;

/// Spending totals over all saved projects
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_expenses: i64,
    pub total_projects: usize,
    pub average_per_project: i64,
    pub this_month_expenses: i64,
    pub last_month_expenses: i64,
    /// Month-over-month change in percent, one decimal place
    #[serde(with = "rust_decimal::serde::float")]
    pub expense_change_percent: Decimal,
    /// Spending per category label
    pub by_type: BTreeMap<String, i64>,
    /// Most recent projects, in input order
    pub recent: Vec<Project>,
}

/// Summarize `projects` (newest first) as seen on `today`
pub fn summarize(projects: &[Project], today: NaiveDate) -> DashboardSummary {
    let this_month = YearMonth::of(today);
    let last_month = this_month.previous();

    let total_expenses: i64 = projects.iter().map(|p| p.total).sum();
    let month_total = |month: YearMonth| -> i64 {
        projects
            .iter()
            .filter(|p| month.contains(p.date))
            .map(|p| p.total)
            .sum()
    };
    let this_month_expenses = month_total(this_month);
    let last_month_expenses = month_total(last_month);

    let mut by_type = BTreeMap::new();
    for project in projects {
        *by_type.entry(project.category_label.clone()).or_insert(0) += project.total;
    }

    DashboardSummary {
        total_expenses,
        total_projects: projects.len(),
        average_per_project: average_per_project(total_expenses, projects.len()),
        this_month_expenses,
        last_month_expenses,
        expense_change_percent: change_percent(this_month_expenses, last_month_expenses),
        by_type,
        recent: projects.iter().take(RECENT_PROJECTS).cloned().collect(),
    }
}

/// `total / count` rounded to whole Rupiah, 0 when there is nothing to average
pub fn average_per_project(total: i64, count: usize) -> i64 {
    if count == 0 {
        return 0;
    }
    (Decimal::from(total) / Decimal::from(count))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

/// `(current - previous) / previous * 100`; 100 when there was nothing to
/// compare against but something was spent, 0 otherwise
fn change_percent(current: i64, previous: i64) -> Decimal {
    if previous > 0 {
        (Decimal::from(current - previous) / Decimal::from(previous) * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    } else if current > 0 {
        Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}
