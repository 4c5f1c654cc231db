//! Token splitting and classification
//!
//! Classification is per token and line-local: the same string always yields
//! the same [`FieldKind`] for a given coordinate threshold.

use serde::Serialize;

/// Data type recognised for a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Coordinate,
}

impl FieldKind {
    pub fn is_coordinate(self) -> bool {
        self == FieldKind::Coordinate
    }

    pub fn is_numeric(self) -> bool {
        self != FieldKind::Text
    }
}

/// Split a line into tokens, discarding empty segments.
///
/// Runs of delimiters collapse, so double spaces left in names by export
/// tools disappear when the name is rejoined.
pub fn scan_tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Classify a token against the given coordinate threshold.
///
/// Coordinate wins over Integer: a whole number at or above the threshold
/// is still a coordinate.
pub fn classify_token(token: &str, coordinate_threshold: f64) -> FieldKind {
    let value = match token.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return FieldKind::Text,
    };

    if value.abs() >= coordinate_threshold {
        FieldKind::Coordinate
    } else if token.parse::<i64>().is_ok() {
        FieldKind::Integer
    } else {
        FieldKind::Float
    }
}

/// Classify every token of a line
pub fn classify_tokens(tokens: &[&str], coordinate_threshold: f64) -> Vec<FieldKind> {
    tokens
        .iter()
        .map(|token| classify_token(token, coordinate_threshold))
        .collect()
}
