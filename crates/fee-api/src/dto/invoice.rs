//! Invoice DTOs

use super::common::empty_as_none;
use super::project::ProjectListItem;
use fee_core::invoice::InvoicePeriod;
use fee_core::models::{Editor, YearMonth};
use fee_core::AppError;
use fee_services::Invoice;
use serde::{Deserialize, Serialize};

/// Invoice query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceQuery {
    /// First month, YYYY-MM
    pub start_month: YearMonth,

    /// Last month, YYYY-MM; defaults to `startMonth`
    #[serde(default, deserialize_with = "empty_as_none")]
    pub end_month: Option<YearMonth>,

    /// Only projects of this editor
    #[serde(default, deserialize_with = "empty_as_none")]
    pub editor_id: Option<i32>,
}

impl InvoiceQuery {
    /// Requested period
    pub fn period(&self) -> Result<InvoicePeriod, AppError> {
        InvoicePeriod::new(self.start_month, self.end_month.unwrap_or(self.start_month))
    }
}

/// Invoice response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub start_month: YearMonth,
    pub end_month: YearMonth,
    /// "Januari 2024" or "Jan 2024 - Feb 2024"
    pub period_label: String,
    pub editor: Option<Editor>,
    pub projects: Vec<ProjectListItem>,
    pub project_count: usize,
    pub total_amount: i64,
    /// "Rp 234.000"
    pub total_formatted: String,
    /// Suggested name for the exported document, without extension
    pub file_stem: String,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        let summary = invoice.summary;
        Self {
            start_month: summary.period.start(),
            end_month: summary.period.end(),
            period_label: invoice.period_label,
            editor: invoice.editor,
            project_count: summary.projects.len(),
            projects: summary.projects.into_iter().map(Into::into).collect(),
            total_amount: summary.total_amount,
            total_formatted: invoice.total_formatted,
            file_stem: invoice.file_stem,
        }
    }
}
