//! Engagement aggregation and CSV export for normalized search records.

pub mod error;
pub mod export;
pub mod summary;

pub use error::ReportError;
pub use export::{export_csv, ExportOutcome, CSV_COLUMNS};
pub use summary::{summarize, EngagementSummary, TopPost, TEXT_PREVIEW_CHARS, TOP_N};
