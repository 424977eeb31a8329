//! Common traits for repositories
//!
//! Defines the storage abstractions the services are written against.

use crate::error::AppError;
use crate::models::{Editor, EditorDraft, NewProject, Project, ProjectFilter, RateEntry, RateTable};
use async_trait::async_trait;

/// Editor repository
#[async_trait]
pub trait EditorRepository: Send + Sync {
    /// All editors, newest first
    async fn find_all(&self) -> Result<Vec<Editor>, AppError>;

    /// Find editor by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Editor>, AppError>;

    /// Create a new editor
    async fn create(&self, draft: &EditorDraft) -> Result<Editor, AppError>;

    /// Replace the fields of an editor, `None` when it does not exist
    async fn update(&self, id: i32, draft: &EditorDraft) -> Result<Option<Editor>, AppError>;

    /// Delete editor by ID. Its projects are kept and lose their editor.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

/// Project repository
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Projects passing `filter`, newest first
    async fn find_all(&self, filter: &ProjectFilter) -> Result<Vec<Project>, AppError>;

    /// Find project by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Project>, AppError>;

    /// Insert a project
    async fn create(&self, project: &NewProject) -> Result<Project, AppError>;

    /// Delete project by ID
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Delete every project, returning how many were removed
    async fn delete_all(&self) -> Result<u64, AppError>;
}

/// Rate card repository
#[async_trait]
pub trait RateRepository: Send + Sync {
    /// All stored rate entries, ordered by key
    async fn find_all(&self) -> Result<Vec<RateEntry>, AppError>;

    /// Insert or replace the entry with the same key
    async fn upsert(&self, rate: &RateEntry) -> Result<RateEntry, AppError>;

    /// Count stored entries
    async fn count(&self) -> Result<i64, AppError>;

    /// Load the rate card as a lookup table
    async fn load_table(&self) -> Result<RateTable, AppError> {
        Ok(RateTable::new(self.find_all().await?))
    }
}
