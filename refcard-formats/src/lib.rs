//! Fixed-format schedule extractors.
//!
//! This crate provides [`ScheduleParser`](refcard_core::ScheduleParser)
//! implementations for the provider layouts we know:
//!
//! - Delimited tables with a header row (CSV/TSV)
//! - Per-game detail reports
//! - Twelve-line blocks, one value per line
//! - Assignment notification e-mails
//!
//! Each extractor stands alone; shared text helpers live in `refcard-core`.

pub mod assignment_email;
pub mod delimited;
pub mod detail_report;
pub mod line_block;

pub use assignment_email::AssignmentEmailParser;
pub use delimited::DelimitedParser;
pub use detail_report::DetailReportParser;
pub use line_block::LineBlockParser;
