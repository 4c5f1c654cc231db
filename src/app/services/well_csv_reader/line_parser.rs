//! Per-line record extraction
//!
//! Each data line is classified token by token. The first coordinate token
//! whose successor is also a coordinate anchors the line: everything before it
//! is the well name, the remaining fields follow at fixed offsets, and for
//! markers everything from the marker-name offset to the end of the line is
//! the marker name.

use super::schema::{FieldName, Schema};
use super::stats::DiagnosticKind;
use super::tokens::{FieldKind, classify_tokens, scan_tokens};
use crate::app::models::{MarkerRecord, Point3D, WellRecord};
use crate::constants::{TOKEN_DELIMITER, field_offsets};

/// Result of parsing a single field token
#[derive(Debug, Clone, PartialEq)]
pub enum FieldParse<T> {
    Value(T),
    /// The line ends before this field
    Missing,
    /// The token exists but is not a valid value
    Invalid(String),
}

impl<T> FieldParse<T> {
    pub fn value(self) -> Option<T> {
        match self {
            FieldParse::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Diagnostic describing why no value is available, if any
    fn issue(&self, field: FieldName) -> Option<DiagnosticKind> {
        match self {
            FieldParse::Value(_) => None,
            FieldParse::Missing => Some(DiagnosticKind::MissingField { field }),
            FieldParse::Invalid(value) => Some(DiagnosticKind::InvalidField {
                field,
                value: value.clone(),
            }),
        }
    }
}

/// Record produced by a data line, if any
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Well(WellRecord),
    Marker(MarkerRecord),
    Skipped,
}

/// Parsed line with the soft issues found along the way
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub outcome: LineOutcome,
    pub issues: Vec<DiagnosticKind>,
}

impl ParsedLine {
    fn skipped(issue: DiagnosticKind) -> Self {
        Self {
            outcome: LineOutcome::Skipped,
            issues: vec![issue],
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.outcome == LineOutcome::Skipped
    }
}

/// Index of the first coordinate token immediately followed by another one
pub fn find_coordinate_anchor(kinds: &[FieldKind]) -> Option<usize> {
    kinds
        .windows(2)
        .position(|pair| pair[0].is_coordinate() && pair[1].is_coordinate())
}

/// Parse one data line according to the file schema
pub fn parse_line(line: &str, schema: Schema, coordinate_threshold: f64) -> ParsedLine {
    if !schema.is_known() {
        return ParsedLine {
            outcome: LineOutcome::Skipped,
            issues: Vec::new(),
        };
    }

    let tokens = scan_tokens(line);
    let kinds = classify_tokens(&tokens, coordinate_threshold);

    let Some(anchor) = find_coordinate_anchor(&kinds) else {
        return ParsedLine::skipped(DiagnosticKind::MissingCoordinatePair);
    };

    let Some(name) = join_tokens(&tokens[..anchor]) else {
        return ParsedLine::skipped(DiagnosticKind::MissingWellName);
    };

    if schema == Schema::Marker {
        parse_marker(&tokens, anchor, name)
    } else {
        parse_well_location(&tokens, anchor, name)
    }
}

/// Well name, X, Y and datum are required; KB and maximum depth are optional
fn parse_well_location(tokens: &[&str], anchor: usize, name: String) -> ParsedLine {
    let x = scan_float(tokens, anchor + field_offsets::X);
    let y = scan_float(tokens, anchor + field_offsets::Y);
    let datum = scan_float(tokens, anchor + field_offsets::ELEVATION);
    let kb = scan_float(tokens, anchor + field_offsets::FIRST_SCALAR);
    let max_depth = scan_float(tokens, anchor + field_offsets::SECOND_SCALAR);

    let issues: Vec<DiagnosticKind> = [
        x.issue(FieldName::X),
        y.issue(FieldName::Y),
        datum.issue(FieldName::Datum),
        kb.issue(FieldName::Kb),
        max_depth.issue(FieldName::MaximumDepth),
    ]
    .into_iter()
    .flatten()
    .collect();

    let outcome = match (x.value(), y.value(), datum.value()) {
        (Some(x), Some(y), Some(datum)) => LineOutcome::Well(WellRecord {
            name,
            position: Point3D::new(x, y, datum),
            kb: kb.value(),
            max_depth: max_depth.value(),
        }),
        _ => LineOutcome::Skipped,
    };

    ParsedLine { outcome, issues }
}

/// Well name, X, Y, Z and marker name are required; MD is optional
fn parse_marker(tokens: &[&str], anchor: usize, well_name: String) -> ParsedLine {
    let x = scan_float(tokens, anchor + field_offsets::X);
    let y = scan_float(tokens, anchor + field_offsets::Y);
    let z = scan_float(tokens, anchor + field_offsets::ELEVATION);
    let measured_depth = scan_float(tokens, anchor + field_offsets::FIRST_SCALAR);
    let marker_name = scan_trailing_text(tokens, anchor + field_offsets::SECOND_SCALAR);

    let issues: Vec<DiagnosticKind> = [
        x.issue(FieldName::X),
        y.issue(FieldName::Y),
        z.issue(FieldName::Z),
        measured_depth.issue(FieldName::MeasuredDepth),
        marker_name.issue(FieldName::MarkerName),
    ]
    .into_iter()
    .flatten()
    .collect();

    let outcome = match (x.value(), y.value(), z.value(), marker_name.value()) {
        (Some(x), Some(y), Some(z), Some(marker_name)) => LineOutcome::Marker(MarkerRecord {
            well_name,
            location: Point3D::new(x, y, z),
            measured_depth: measured_depth.value(),
            marker_name,
        }),
        _ => LineOutcome::Skipped,
    };

    ParsedLine { outcome, issues }
}

/// Parse the token at `pos` as a floating-point number
fn scan_float(tokens: &[&str], pos: usize) -> FieldParse<f64> {
    match tokens.get(pos) {
        None => FieldParse::Missing,
        Some(token) => match token.parse::<f64>() {
            Ok(value) if value.is_finite() => FieldParse::Value(value),
            _ => FieldParse::Invalid((*token).to_string()),
        },
    }
}

/// Join all tokens from `pos` to the end of the line
fn scan_trailing_text(tokens: &[&str], pos: usize) -> FieldParse<String> {
    match tokens.get(pos..).and_then(join_tokens) {
        Some(text) => FieldParse::Value(text),
        None => FieldParse::Missing,
    }
}

fn join_tokens(tokens: &[&str]) -> Option<String> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(TOKEN_DELIMITER))
    }
}
