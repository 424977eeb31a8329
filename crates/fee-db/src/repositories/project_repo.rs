//! Project repository implementation
//!
//! Projects are always read joined with their editor so the editor name
//! travels with the project.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use fee_core::{
    models::{NewProject, Project, ProjectFilter},
    traits::ProjectRepository,
    AppError, AppResult,
};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, instrument, warn};

/// Columns selected for a project joined with its editor (`p`, `e`)
const PROJECT_SELECT_COLUMNS: &str = r#"
    p.id, p.name, p.category_label, p.duration_minutes, p.total, p.tags,
    p.editor_id, e.name AS editor_name, p.date, p.created_at
"#;

/// Database row representation of a project
#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i32,
    name: String,
    category_label: String,
    duration_minutes: Decimal,
    total: i64,
    tags: Vec<String>,
    editor_id: Option<i32>,
    editor_name: Option<String>,
    date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            name: row.name,
            category_label: row.category_label,
            duration_minutes: row.duration_minutes.normalize(),
            total: row.total,
            tags: row.tags,
            editor_id: row.editor_id,
            editor_name: row.editor_name,
            date: row.date,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL implementation of ProjectRepository
pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    /// Create a new project repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    #[instrument(skip(self))]
    async fn find_all(&self, filter: &ProjectFilter) -> AppResult<Vec<Project>> {
        debug!("Listing projects with filter: {:?}", filter);

        let (start, end) = filter.date_range.unzip();
        let query = format!(
            r#"
            SELECT {}
            FROM projects p
            LEFT JOIN editors e ON e.id = p.editor_id
            WHERE ($1::INTEGER IS NULL OR p.editor_id = $1)
              AND ($2::DATE IS NULL OR p.date >= $2)
              AND ($3::DATE IS NULL OR p.date <= $3)
            ORDER BY p.created_at DESC, p.id DESC
            "#,
            PROJECT_SELECT_COLUMNS
        );

        let rows = sqlx::query_as::<sqlx::Postgres, ProjectRow>(&query)
            .bind(filter.editor_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error listing projects: {}", e);
                AppError::Database(format!("Failed to list projects: {}", e))
            })?;

        debug!("Found {} projects", rows.len());
        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Project>> {
        debug!("Finding project by id: {}", id);

        let query = format!(
            r#"
            SELECT {}
            FROM projects p
            LEFT JOIN editors e ON e.id = p.editor_id
            WHERE p.id = $1
            "#,
            PROJECT_SELECT_COLUMNS
        );

        let row = sqlx::query_as::<sqlx::Postgres, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error finding project {}: {}", id, e);
                AppError::Database(format!("Failed to find project: {}", e))
            })?;

        Ok(row.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn create(&self, project: &NewProject) -> AppResult<Project> {
        debug!("Creating project: {}", project.name);

        let query = format!(
            r#"
            WITH p AS (
                INSERT INTO projects (
                    name, category_label, duration_minutes, total, tags, editor_id, date
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
            )
            SELECT {}
            FROM p
            LEFT JOIN editors e ON e.id = p.editor_id
            "#,
            PROJECT_SELECT_COLUMNS
        );

        let row = sqlx::query_as::<sqlx::Postgres, ProjectRow>(&query)
            .bind(&project.name)
            .bind(&project.category_label)
            .bind(project.duration_minutes)
            .bind(project.total)
            .bind(&project.tags)
            .bind(project.editor_id)
            .bind(project.date)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_foreign_key_violation() {
                        warn!("Project references unknown editor {:?}", project.editor_id);
                        return AppError::EditorNotFound(project.editor_id.unwrap_or_default());
                    }
                }
                error!("Database error creating project: {}", e);
                AppError::Database(format!("Failed to create project: {}", e))
            })?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> AppResult<bool> {
        debug!("Deleting project: {}", id);

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error deleting project {}: {}", id, e);
                AppError::Database(format!("Failed to delete project: {}", e))
            })?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> AppResult<u64> {
        debug!("Deleting all projects");

        let result = sqlx::query("DELETE FROM projects")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error deleting all projects: {}", e);
                AppError::Database(format!("Failed to delete projects: {}", e))
            })?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_project_row_conversion() {
        let row = ProjectRow {
            id: 3,
            name: "Company profile".to_string(),
            category_label: "Full Editing".to_string(),
            duration_minutes: dec!(5.00),
            total: 234_000,
            tags: vec!["Rush".to_string()],
            editor_id: Some(1),
            editor_name: Some("Budi".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            created_at: Utc::now(),
        };

        let project: Project = row.into();
        assert_eq!(project.id, 3);
        assert_eq!(project.duration_minutes.to_string(), "5");
        assert_eq!(project.total, 234_000);
        assert_eq!(project.tags, vec!["Rush"]);
        assert_eq!(project.editor_name.as_deref(), Some("Budi"));
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_create_and_filter_projects() {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgresql://localhost/editor_fee".to_string());
        let pool = PgPool::connect(&database_url).await.unwrap();
        crate::run_migrations(&pool).await.unwrap();
        let repo = PgProjectRepository::new(pool);

        let created = repo
            .create(&NewProject {
                name: "Filter test".to_string(),
                category_label: "Rough Cut (Video)".to_string(),
                duration_minutes: dec!(2.5),
                total: 55_000,
                tags: vec![],
                editor_id: None,
                date: NaiveDate::from_ymd_opt(1999, 3, 10).unwrap(),
            })
            .await
            .unwrap();

        let filter = ProjectFilter::new(
            None,
            NaiveDate::from_ymd_opt(1999, 3, 1),
            NaiveDate::from_ymd_opt(1999, 3, 31),
        );
        let found = repo.find_all(&filter).await.unwrap();
        assert!(found.iter().any(|p| p.id == created.id));

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
