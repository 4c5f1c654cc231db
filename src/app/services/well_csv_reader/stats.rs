//! Import diagnostics and statistics
//!
//! Soft failures (unknown schema, lines without a coordinate pair, unparsable
//! fields) never abort an import. They are collected here so callers can
//! inspect and assert on them.

use super::schema::{FieldName, Schema};
use serde::Serialize;
use std::fmt;

/// Reason a line was skipped or a field was dropped
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Header matched neither known field sequence
    UnknownSchema { header: String },
    /// No two adjacent coordinate-sized numbers on the line
    MissingCoordinatePair,
    /// The coordinate pair starts the line, leaving no well name
    MissingWellName,
    /// The line ends before this field
    MissingField { field: FieldName },
    /// The token for this field is not a number
    InvalidField { field: FieldName, value: String },
    /// Empty data line
    BlankLine,
    /// Invalid UTF-8 bytes on the line were replaced
    InvalidEncoding,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnknownSchema { header } => {
                write!(f, "unsupported field sequence \"{}\"", header)
            }
            DiagnosticKind::MissingCoordinatePair => {
                write!(f, "could not locate adjacent x and y coordinates")
            }
            DiagnosticKind::MissingWellName => write!(f, "could not parse well name"),
            DiagnosticKind::MissingField { field } => write!(f, "missing {} value", field),
            DiagnosticKind::InvalidField { field, value } => {
                write!(f, "invalid {} value '{}'", field, value)
            }
            DiagnosticKind::BlankLine => write!(f, "blank line"),
            DiagnosticKind::InvalidEncoding => write!(f, "invalid UTF-8 replaced"),
        }
    }
}

/// A soft failure tied to a 1-based line number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
    /// Whether the line produced no record because of this issue
    pub record_skipped: bool,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = if self.record_skipped {
            "line skipped"
        } else {
            "value ignored"
        };
        write!(f, "line {}: {} ({})", self.line, self.kind, action)
    }
}

/// Counters and diagnostics for one imported file
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportStats {
    /// Lines read including the header line
    pub lines_read: usize,

    /// Well location records handed to the repository
    pub wells_imported: usize,

    /// Marker records handed to the repository
    pub markers_imported: usize,

    /// Data lines that produced no record
    pub lines_skipped: usize,

    /// Soft failures in line order
    pub diagnostics: Vec<Diagnostic>,
}

impl ImportStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of data lines (everything after the header)
    pub fn data_lines(&self) -> usize {
        self.lines_read.saturating_sub(1)
    }

    pub fn records_imported(&self) -> usize {
        self.wells_imported + self.markers_imported
    }

    /// Share of data lines that produced a record, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.data_lines() == 0 {
            0.0
        } else {
            (self.records_imported() as f64 / self.data_lines() as f64) * 100.0
        }
    }

    /// Diagnostics that caused a line to be skipped
    pub fn skipped(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.record_skipped)
    }

    pub(crate) fn record(&mut self, line: usize, kind: DiagnosticKind, record_skipped: bool) {
        self.diagnostics.push(Diagnostic {
            line,
            kind,
            record_skipped,
        });
    }
}

/// Outcome of importing one file
#[derive(Debug, Clone, Serialize)]
pub struct ImportResult {
    /// Path or name of the imported source
    pub source: String,

    /// Schema detected from the header line
    pub schema: Schema,

    pub stats: ImportStats,
}

impl ImportResult {
    /// True when the header matched no known schema
    pub fn has_unknown_schema(&self) -> bool {
        self.schema == Schema::Unknown
    }
}
