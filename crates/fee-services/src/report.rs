//! Dashboard and export reports over saved projects

use crate::constants::{EXPORT_EMPTY_CELL, EXPORT_FILE_PREFIX};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use fee_core::{
    dashboard::{average_per_project, summarize, DashboardSummary},
    models::{Project, ProjectFilter},
    traits::ProjectRepository,
    AppError, AppResult,
};
use std::fmt::Write;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Report service
pub struct ReportService<P: ProjectRepository> {
    project_repo: Arc<P>,
    tz: Tz,
}

impl<P: ProjectRepository> ReportService<P> {
    /// Create a report service resolving "today" in `tz`
    pub fn new(project_repo: Arc<P>, tz: Tz) -> Self {
        Self { project_repo, tz }
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }

    /// Dashboard summary of every project as of today
    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> AppResult<DashboardSummary> {
        let projects = self.project_repo.find_all(&ProjectFilter::default()).await?;
        Ok(summarize(&projects, self.today()))
    }

    /// Export the projects passing `filter` as CSV.
    ///
    /// Returns the suggested file name and the document.
    #[instrument(skip(self))]
    pub async fn export_csv(&self, filter: &ProjectFilter) -> AppResult<(String, String)> {
        let projects = self.project_repo.find_all(filter).await?;
        debug!("Exporting {} projects", projects.len());

        let file_name = format!("{}_{}.csv", EXPORT_FILE_PREFIX, self.today());
        let document = render_csv(&projects)
            .map_err(|e| AppError::Internal(format!("Failed to render export: {}", e)))?;
        Ok((file_name, document))
    }
}

/// Render projects as CSV followed by a summary block
pub fn render_csv(projects: &[Project]) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "no,date,project,type,duration_minutes,editor,tags,total")?;

    for (i, p) in projects.iter().enumerate() {
        let editor = p.editor_name.as_deref().unwrap_or(EXPORT_EMPTY_CELL);
        let tags = if p.tags.is_empty() {
            EXPORT_EMPTY_CELL.to_string()
        } else {
            p.tags.join(", ")
        };
        writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            i + 1,
            p.date,
            csv_field(&p.name),
            csv_field(&p.category_label),
            p.duration_minutes.normalize(),
            csv_field(editor),
            csv_field(&tags),
            p.total
        )?;
    }

    let total: i64 = projects.iter().map(|p| p.total).sum();
    writeln!(out)?;
    writeln!(out, "total_projects,{}", projects.len())?;
    writeln!(out, "total_expenses,{}", total)?;
    writeln!(out, "average_per_project,{}", average_per_project(total, projects.len()))?;

    Ok(out)
}

/// Quote a field containing a separator, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
