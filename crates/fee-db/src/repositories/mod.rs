//! Repository implementations
//!
//! This module contains concrete implementations of the repository traits
//! defined in fee-core, using sqlx for PostgreSQL access.

pub mod editor_repo;
pub mod project_repo;
pub mod rate_repo;

pub use editor_repo::PgEditorRepository;
pub use project_repo::PgProjectRepository;
pub use rate_repo::PgRateRepository;
