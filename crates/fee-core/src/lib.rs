//! Editor Fee Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the editor fee calculator. It includes:
//!
//! - Domain models (Category, ConditionSet, RateEntry, Project, Editor)
//! - Fee calculation, invoice aggregation and the dashboard summary
//! - Repository traits implemented by the database layer
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod config;
pub mod dashboard;
pub mod error;
pub mod fee;
pub mod invoice;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;
pub use fee::{calculate_fee, FeeBreakdown, FeeQuote, FeeRequest};

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
