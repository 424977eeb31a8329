//! Project DTOs
//!
//! Project list items keep the field names the browser front end reads:
//! `project` for the name and `type` for the category label.

use super::common::{deserialize_optional_id, empty_as_none};
use super::quote::QuoteRequest;
use chrono::{DateTime, NaiveDate, Utc};
use fee_core::models::{Project, ProjectFilter};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Project list filter
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQuery {
    /// Only projects of this editor
    #[serde(default, deserialize_with = "empty_as_none")]
    pub editor_id: Option<i32>,

    /// First day, inclusive; ignored without `endDate`
    #[serde(default, deserialize_with = "empty_as_none")]
    pub start_date: Option<NaiveDate>,

    /// Last day, inclusive; ignored without `startDate`
    #[serde(default, deserialize_with = "empty_as_none")]
    pub end_date: Option<NaiveDate>,
}

impl ProjectQuery {
    /// Repository filter
    pub fn to_filter(&self) -> ProjectFilter {
        ProjectFilter::new(self.editor_id, self.start_date, self.end_date)
    }
}

/// Project as listed by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListItem {
    pub id: i32,
    /// Project name
    pub project: String,
    /// Category label
    #[serde(rename = "type")]
    pub category_label: String,
    /// Duration in minutes
    #[serde(with = "rust_decimal::serde::float")]
    pub duration: Decimal,
    pub total: i64,
    pub tags: Vec<String>,
    /// ISO date, YYYY-MM-DD
    pub date: NaiveDate,
    pub editor_id: Option<i32>,
    pub editor_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectListItem {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            project: p.name,
            category_label: p.category_label,
            duration: p.duration_minutes,
            total: p.total,
            tags: p.tags,
            date: p.date,
            editor_id: p.editor_id,
            editor_name: p.editor_name,
            created_at: p.created_at,
        }
    }
}

/// Save a calculator quote as a project
///
/// The fee is recomputed on the server from the quote inputs.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Project name
    #[serde(alias = "project")]
    #[validate(length(min = 1, max = 200, message = "Project name is required"))]
    pub name: String,

    /// Editor who did the work
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub editor_id: Option<i32>,

    /// Quote inputs
    #[serde(flatten)]
    pub quote: QuoteRequest,
}
