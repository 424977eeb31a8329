//! Data Transfer Objects (DTOs) for API requests and responses

pub mod common;
pub mod dashboard;
pub mod editor;
pub mod invoice;
pub mod project;
pub mod quote;
pub mod rate;

pub use common::*;
pub use dashboard::*;
pub use editor::*;
pub use invoice::*;
pub use project::*;
pub use quote::*;
pub use rate::*;
