//! Editor Fee Database Layer
//!
//! This crate provides PostgreSQL database access and repository implementations
//! for the editor fee calculator. It includes:
//!
//! - Connection pool management with sqlx
//! - Embedded schema migrations
//! - Repository implementations for editors, projects and the rate card

pub mod pool;
pub mod repositories;

pub use pool::{create_pool, run_migrations};
pub use repositories::*;

// Re-export commonly used types
pub use fee_core::{AppError, AppResult};
pub use sqlx::{PgPool, Postgres};
