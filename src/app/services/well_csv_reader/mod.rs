//! Schema-sniffing reader for well location and marker exports
//!
//! Well survey exports (e.g. from GOCAD) are plain text files with a header
//! line of field names followed by whitespace-separated data lines. There is no
//! quoting, and well and marker names may themselves contain spaces, so column
//! boundaries are re-derived for every line from the position of the first two
//! adjacent coordinate-sized numbers.
//!
//! ## Architecture
//!
//! - [`tokens`] - Token splitting and per-token classification
//! - [`schema`] - Header field-name matching against the known layouts
//! - [`line_parser`] - Coordinate anchor detection and field extraction
//! - [`reader`] - File handling and orchestration into a [`WellRepository`]
//! - [`stats`] - Diagnostics and import statistics
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geologic_toolbox::app::services::well_csv_reader::WellCsvReader;
//!
//! # fn example() -> geologic_toolbox::Result<()> {
//! let reader = WellCsvReader::default();
//! let (wells, result) = reader.read(std::path::Path::new("wells.txt"))?;
//!
//! println!("Imported {} wells ({} lines skipped)",
//!          wells.len(),
//!          result.stats.lines_skipped);
//! # Ok(())
//! # }
//! ```
//!
//! [`WellRepository`]: crate::app::services::well_repository::WellRepository

pub mod line_parser;
pub mod reader;
pub mod schema;
pub mod stats;
pub mod tokens;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_parser::{FieldParse, LineOutcome, ParsedLine, parse_line};
pub use reader::WellCsvReader;
pub use schema::{FieldName, Schema, detect_schema};
pub use stats::{Diagnostic, DiagnosticKind, ImportResult, ImportStats};
pub use tokens::{FieldKind, classify_token, scan_tokens};
