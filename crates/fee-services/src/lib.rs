//! Business logic services for the editor fee calculator
//!
//! This crate contains the services that orchestrate the pure fee and
//! invoice logic of `fee-core` with the repositories.
//!
//! # Architecture
//!
//! Services are designed to be composable and testable:
//! - Each service is generic over the repository traits it needs
//! - Repositories are held in `Arc` for sharing across async tasks
//! - All operations are instrumented with tracing
//!
//! # Services
//!
//! - `QuoteService` - Fee quotes against the stored rate card, saving projects
//! - `RateConfigService` - Rate card updates, reset and startup seeding
//! - `InvoiceService` - Invoices over a month range
//! - `ReportService` - Dashboard summary and CSV export

pub mod invoice;
pub mod quote;
pub mod rate_config;
pub mod report;

pub use invoice::{Invoice, InvoiceService};
pub use quote::{ProjectSubmission, QuoteService};
pub use rate_config::RateConfigService;
pub use report::ReportService;

/// Business logic constants
pub mod constants {
    /// Longest accepted project name
    pub const MAX_PROJECT_NAME_LEN: usize = 200;

    /// Decimal places kept for a stored project duration
    pub const DURATION_DECIMAL_PLACES: u32 = 2;

    /// Stored durations must stay below this many minutes
    pub const MAX_STORED_DURATION_MINUTES: i64 = 100_000_000;

    /// File name prefix of the project export
    pub const EXPORT_FILE_PREFIX: &str = "Editor_Fee_Report";

    /// Placeholder for a missing editor or empty tag list in exports
    pub const EXPORT_EMPTY_CELL: &str = "-";
}
