//! API layer for the editor fee calculator
//!
//! HTTP API handlers for quotes, projects, editors, rates and invoices.

#![forbid(unsafe_code)]
#![warn(clippy::all, missing_docs)]

pub mod dto;
pub mod handlers;

// Re-export DTOs (common types)
pub use dto::{ApiResponse, MessageResponse};

// Re-export handler configuration functions
pub use handlers::{
    configure_dashboard, configure_editors, configure_health, configure_invoices,
    configure_projects, configure_quotes, configure_rates,
};
