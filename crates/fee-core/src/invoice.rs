//! Invoice period aggregation
//!
//! An invoice covers every project whose date falls in an inclusive range
//! of calendar months, optionally narrowed to one editor.

use crate::error::AppError;
use crate::models::{Editor, Project, YearMonth};
use serde::Serialize;

/// Inclusive range of months, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePeriod {
    start: YearMonth,
    end: YearMonth,
}

impl InvoicePeriod {
    /// Create a period, rejecting an end before the start
    pub fn new(start: YearMonth, end: YearMonth) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::Validation(format!(
                "Invoice period start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Period covering a single month
    pub fn single(month: YearMonth) -> Self {
        Self {
            start: month,
            end: month,
        }
    }

    pub fn start(&self) -> YearMonth {
        self.start
    }

    pub fn end(&self) -> YearMonth {
        self.end
    }

    /// Move the start. An end before the new start is pushed forward to it.
    pub fn with_start(self, start: YearMonth) -> Self {
        Self {
            start,
            end: self.end.max(start),
        }
    }

    /// Move the end. An end before the start is refused and the period is
    /// returned unchanged.
    pub fn with_end(self, end: YearMonth) -> Self {
        if end >= self.start {
            Self { end, ..self }
        } else {
            self
        }
    }

    /// Whether `project` is dated inside the period
    pub fn contains(&self, project: &Project) -> bool {
        let month = YearMonth::of(project.date);
        month >= self.start && month <= self.end
    }

    /// "Januari 2024" for one month, "Jan 2024 - Mar 2024" for a range
    pub fn label(&self) -> String {
        if self.start == self.end {
            self.start.long_label()
        } else {
            format!("{} - {}", self.start.short_label(), self.end.short_label())
        }
    }
}

/// Projects billed in one invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub period: InvoicePeriod,
    pub editor_id: Option<i32>,
    pub projects: Vec<Project>,
    pub total_amount: i64,
}

impl InvoiceSummary {
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

/// Select the projects billed for `period` and `editor_id` and sum them.
///
/// Input order is kept.
pub fn aggregate(
    projects: impl IntoIterator<Item = Project>,
    period: InvoicePeriod,
    editor_id: Option<i32>,
) -> InvoiceSummary {
    let projects: Vec<Project> = projects
        .into_iter()
        .filter(|p| period.contains(p))
        .filter(|p| editor_id.map_or(true, |id| p.editor_id == Some(id)))
        .collect();
    let total_amount = projects.iter().map(|p| p.total).sum();

    InvoiceSummary {
        period,
        editor_id,
        projects,
        total_amount,
    }
}

/// File name stem of an exported invoice
pub fn file_stem(period: &InvoicePeriod, editor: Option<&Editor>) -> String {
    let who = editor
        .map(|e| e.name.split_whitespace().collect::<Vec<_>>().join("_"))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "All".to_string());
    format!("Invoice_{}_{}_to_{}", who, period.start(), period.end())
}

/// Format an amount as Indonesian Rupiah, e.g. "Rp 234.000"
pub fn format_idr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}
