//! Column-mapping extraction for tables no fixed-format parser understands.
//!
//! A user assigns each column of a table to a [`MappedField`]; the assignment
//! is stored as a [`refcard_core::MappingProfile`] and replayed on later
//! imports by the [`MappingEngine`].

pub mod engine;
pub mod error;
pub mod field;
pub mod header;

pub use engine::{DEFAULT_PROFILE_KEY, MappingEngine, MappingParser, TableShape};
pub use error::MappingError;
pub use field::MappedField;
pub use header::{HEADER_NUMERIC_THRESHOLD, looks_like_header_row, numeric_fraction};
