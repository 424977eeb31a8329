//! Invoice service
//!
//! Loads the projects of a month range and aggregates them into an invoice.

use fee_core::{
    invoice::{aggregate, file_stem, format_idr, InvoicePeriod, InvoiceSummary},
    models::{Editor, ProjectFilter},
    traits::{EditorRepository, ProjectRepository},
    AppError, AppResult,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// An invoice ready to be rendered
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(flatten)]
    pub summary: InvoiceSummary,
    /// Billed editor, absent for an all-editor invoice
    pub editor: Option<Editor>,
    /// Period label, e.g. "Januari 2024"
    pub period_label: String,
    /// IDR formatted total, e.g. "Rp 234.000"
    pub total_formatted: String,
    /// Stem for the exported invoice file
    pub file_stem: String,
}

/// Invoice service
pub struct InvoiceService<P: ProjectRepository, E: EditorRepository> {
    project_repo: Arc<P>,
    editor_repo: Arc<E>,
}

impl<P: ProjectRepository, E: EditorRepository> InvoiceService<P, E> {
    /// Create a new invoice service
    pub fn new(project_repo: Arc<P>, editor_repo: Arc<E>) -> Self {
        Self {
            project_repo,
            editor_repo,
        }
    }

    /// Build the invoice of `period`, optionally for a single editor
    #[instrument(skip(self))]
    pub async fn build(&self, period: InvoicePeriod, editor_id: Option<i32>) -> AppResult<Invoice> {
        let editor = match editor_id {
            Some(id) => Some(
                self.editor_repo
                    .find_by_id(id)
                    .await?
                    .ok_or(AppError::EditorNotFound(id))?,
            ),
            None => None,
        };

        let filter = ProjectFilter::new(
            editor_id,
            Some(period.start().first_day()),
            Some(period.end().last_day()),
        );
        let projects = self.project_repo.find_all(&filter).await?;
        debug!("Loaded {} projects for {}", projects.len(), period.label());

        let summary = aggregate(projects, period, editor_id);

        info!(
            "Invoice {}: {} projects, total {}",
            period.label(),
            summary.project_count(),
            summary.total_amount
        );

        Ok(Invoice {
            period_label: period.label(),
            total_formatted: format_idr(summary.total_amount),
            file_stem: file_stem(&period, editor.as_ref()),
            editor,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockEditorRepository, MockProjectRepository};
    use chrono::{NaiveDate, Utc};
    use fee_core::models::{Project, YearMonth};
    use rust_decimal_macros::dec;

    fn project(id: i32, date: &str, total: i64, editor_id: Option<i32>) -> Project {
        Project {
            id,
            name: format!("Project {}", id),
            category_label: "Full Editing".to_string(),
            duration_minutes: dec!(2),
            total,
            tags: vec![],
            editor_id,
            editor_name: None,
            date: date.parse::<NaiveDate>().unwrap(),
            created_at: Utc::now(),
        }
    }

    fn service(projects: Vec<Project>) -> InvoiceService<MockProjectRepository, MockEditorRepository> {
        InvoiceService::new(
            Arc::new(MockProjectRepository::with(projects)),
            Arc::new(MockEditorRepository::with_names(&["Budi Santoso", "Sari"])),
        )
    }

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_january_invoice() {
        let service = service(vec![
            project(2, "2024-02-03", 50_000, Some(1)),
            project(1, "2024-01-15", 100_000, Some(1)),
        ]);

        let invoice = service
            .build(InvoicePeriod::single(ym("2024-01")), None)
            .await
            .unwrap();

        assert_eq!(invoice.summary.project_count(), 1);
        assert_eq!(invoice.summary.total_amount, 100_000);
        assert_eq!(invoice.period_label, "Januari 2024");
        assert_eq!(invoice.total_formatted, "Rp 100.000");
        assert_eq!(invoice.file_stem, "Invoice_All_2024-01_to_2024-01");
    }

    #[tokio::test]
    async fn test_editor_invoice_over_range() {
        let service = service(vec![
            project(3, "2024-02-20", 70_000, Some(2)),
            project(2, "2024-02-03", 50_000, Some(1)),
            project(1, "2024-01-15", 100_000, Some(1)),
        ]);
        let period = InvoicePeriod::new(ym("2024-01"), ym("2024-02")).unwrap();

        let invoice = service.build(period, Some(1)).await.unwrap();

        assert_eq!(invoice.summary.total_amount, 150_000);
        assert_eq!(invoice.editor.map(|e| e.name).as_deref(), Some("Budi Santoso"));
        assert_eq!(invoice.file_stem, "Invoice_Budi_Santoso_2024-01_to_2024-02");
        assert_eq!(invoice.period_label, "Jan 2024 - Feb 2024");
    }

    #[tokio::test]
    async fn test_unknown_editor() {
        let service = service(vec![]);
        let err = service
            .build(InvoicePeriod::single(ym("2024-01")), Some(42))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EditorNotFound(42)));
    }

    #[tokio::test]
    async fn test_empty_period() {
        let service = service(vec![project(1, "2023-06-01", 10_000, None)]);
        let invoice = service
            .build(InvoicePeriod::single(ym("2024-06")), None)
            .await
            .unwrap();
        assert!(invoice.summary.projects.is_empty());
        assert_eq!(invoice.total_formatted, "Rp 0");
    }
}
