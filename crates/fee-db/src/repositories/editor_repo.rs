//! Editor repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fee_core::{
    models::{Editor, EditorDraft},
    traits::EditorRepository,
    AppError, AppResult,
};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, instrument};

/// Database row representation of an editor
#[derive(Debug, FromRow)]
struct EditorRow {
    id: i32,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<EditorRow> for Editor {
    fn from(row: EditorRow) -> Self {
        Editor {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL implementation of EditorRepository
pub struct PgEditorRepository {
    pool: PgPool,
}

impl PgEditorRepository {
    /// Create a new editor repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EditorRepository for PgEditorRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> AppResult<Vec<Editor>> {
        debug!("Listing all editors");

        let rows = sqlx::query_as::<sqlx::Postgres, EditorRow>(
            r#"
            SELECT id, name, email, phone, created_at
            FROM editors
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error listing editors: {}", e);
            AppError::Database(format!("Failed to list editors: {}", e))
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Editor>> {
        debug!("Finding editor by id: {}", id);

        let row = sqlx::query_as::<sqlx::Postgres, EditorRow>(
            r#"
            SELECT id, name, email, phone, created_at
            FROM editors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error finding editor {}: {}", id, e);
            AppError::Database(format!("Failed to find editor: {}", e))
        })?;

        Ok(row.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn create(&self, draft: &EditorDraft) -> AppResult<Editor> {
        debug!("Creating editor: {}", draft.name);

        let row = sqlx::query_as::<sqlx::Postgres, EditorRow>(
            r#"
            INSERT INTO editors (name, email, phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, phone, created_at
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error creating editor: {}", e);
            AppError::Database(format!("Failed to create editor: {}", e))
        })?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i32, draft: &EditorDraft) -> AppResult<Option<Editor>> {
        debug!("Updating editor: {}", id);

        let row = sqlx::query_as::<sqlx::Postgres, EditorRow>(
            r#"
            UPDATE editors
            SET name = $2, email = $3, phone = $4
            WHERE id = $1
            RETURNING id, name, email, phone, created_at
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Database error updating editor {}: {}", id, e);
            AppError::Database(format!("Failed to update editor: {}", e))
        })?;

        Ok(row.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> AppResult<bool> {
        debug!("Deleting editor: {}", id);

        // projects.editor_id is ON DELETE SET NULL
        let result = sqlx::query("DELETE FROM editors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Database error deleting editor {}: {}", id, e);
                AppError::Database(format!("Failed to delete editor: {}", e))
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_row_conversion() {
        let now = Utc::now();
        let row = EditorRow {
            id: 7,
            name: "Sari".to_string(),
            email: Some("sari@example.com".to_string()),
            phone: None,
            created_at: now,
        };

        let editor: Editor = row.into();
        assert_eq!(editor.id, 7);
        assert_eq!(editor.name, "Sari");
        assert_eq!(editor.email.as_deref(), Some("sari@example.com"));
        assert!(editor.phone.is_none());
        assert_eq!(editor.created_at, now);
    }
}
