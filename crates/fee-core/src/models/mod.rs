//! Domain models for the editor fee calculator
//!
//! This module contains all the core domain models used throughout the application.

pub mod category;
pub mod condition;
pub mod editor;
pub mod month;
pub mod project;
pub mod rate;

pub use category::{Category, MainCategory, MediaType};
pub use condition::{Condition, ConditionSet, Surcharge, SUBTITLE_FLAT_FEE};
pub use editor::{Editor, EditorDraft};
pub use month::YearMonth;
pub use project::{NewProject, Project, ProjectFilter};
pub use rate::{RateEntry, RateTable};
