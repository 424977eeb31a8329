//! Project model
//!
//! A project is a saved quote: the fee is computed once when the project is
//! created and never recomputed afterwards, even if the rate card changes.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Saved project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier
    pub id: i32,

    /// Project name
    pub name: String,

    /// Label of the rate used for the quote (e.g. "Full Editing")
    pub category_label: String,

    /// Duration in minutes
    #[serde(with = "rust_decimal::serde::float")]
    pub duration_minutes: Decimal,

    /// Fee in whole Rupiah
    pub total: i64,

    /// Applied condition tags, in display order
    pub tags: Vec<String>,

    /// Editor who did the work
    pub editor_id: Option<i32>,

    /// Editor name, joined from the editors table
    pub editor_name: Option<String>,

    /// Business date of the project
    pub date: NaiveDate,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields needed to insert a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub category_label: String,
    pub duration_minutes: Decimal,
    pub total: i64,
    pub tags: Vec<String>,
    pub editor_id: Option<i32>,
    pub date: NaiveDate,
}

/// Filter for listing projects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Only projects of this editor
    pub editor_id: Option<i32>,

    /// Only projects dated within this inclusive range
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl ProjectFilter {
    /// Build a filter from optional query bounds.
    ///
    /// The date range only applies when both bounds are present.
    pub fn new(
        editor_id: Option<i32>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            editor_id,
            date_range: start_date.zip(end_date),
        }
    }

    /// Whether `project` passes the filter
    pub fn matches(&self, project: &Project) -> bool {
        let editor_ok = self
            .editor_id
            .map_or(true, |id| project.editor_id == Some(id));
        let date_ok = self
            .date_range
            .map_or(true, |(start, end)| project.date >= start && project.date <= end);
        editor_ok && date_ok
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use rust_decimal_macros::dec;

    /// Project dated `date` with the given total and editor
    pub fn project(id: i32, date: &str, total: i64, editor_id: Option<i32>) -> Project {
        Project {
            id,
            name: format!("Project {}", id),
            category_label: "Full Editing".to_string(),
            duration_minutes: dec!(1),
            total,
            tags: vec![],
            editor_id,
            editor_name: None,
            date: date.parse().unwrap(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::project;
    use super::*;

    #[test]
    fn test_filter_requires_both_bounds() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1);
        let filter = ProjectFilter::new(None, start, None);
        assert!(filter.date_range.is_none());
        assert!(filter.matches(&project(1, "2020-05-05", 1, None)));
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let filter = ProjectFilter::new(
            None,
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 1, 31),
        );
        assert!(filter.matches(&project(1, "2024-01-01", 1, None)));
        assert!(filter.matches(&project(2, "2024-01-31", 1, None)));
        assert!(!filter.matches(&project(3, "2024-02-01", 1, None)));
    }

    #[test]
    fn test_filter_by_editor() {
        let filter = ProjectFilter::new(Some(2), None, None);
        assert!(filter.matches(&project(1, "2024-01-01", 1, Some(2))));
        assert!(!filter.matches(&project(2, "2024-01-01", 1, Some(3))));
        assert!(!filter.matches(&project(3, "2024-01-01", 1, None)));
    }

    #[test]
    fn test_duration_serializes_as_number() {
        let mut p = project(1, "2024-03-10", 45_000, None);
        p.duration_minutes = rust_decimal_macros::dec!(2.5);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["durationMinutes"], serde_json::json!(2.5));
        assert_eq!(json["date"], "2024-03-10");
    }
}
