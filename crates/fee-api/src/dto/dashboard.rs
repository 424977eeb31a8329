//! Dashboard DTOs

use super::project::ProjectListItem;
use fee_core::dashboard::DashboardSummary;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Dashboard response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_expenses: i64,
    pub total_projects: usize,
    pub average_per_project: i64,
    pub this_month_expenses: i64,
    pub last_month_expenses: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub expense_change_percent: Decimal,
    pub by_type: BTreeMap<String, i64>,
    pub recent_projects: Vec<ProjectListItem>,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(s: DashboardSummary) -> Self {
        Self {
            total_expenses: s.total_expenses,
            total_projects: s.total_projects,
            average_per_project: s.average_per_project,
            this_month_expenses: s.this_month_expenses,
            last_month_expenses: s.last_month_expenses,
            expense_change_percent: s.expense_change_percent,
            by_type: s.by_type,
            recent_projects: s.recent.into_iter().map(Into::into).collect(),
        }
    }
}
