//! HTTP request handlers

pub mod dashboard;
pub mod editor;
pub mod health;
pub mod invoice;
pub mod project;
pub mod quote;
pub mod rate;

pub use dashboard::configure as configure_dashboard;
pub use editor::configure as configure_editors;
pub use health::configure as configure_health;
pub use invoice::configure as configure_invoices;
pub use project::configure as configure_projects;
pub use quote::configure as configure_quotes;
pub use rate::configure as configure_rates;
