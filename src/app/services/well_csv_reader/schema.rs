//! Header schema detection
//!
//! The header line is matched once per file against the two fixed field-name
//! sequences. Matching is positional and case-insensitive; any extra columns
//! after the sixth are ignored.

use serde::Serialize;
use std::fmt;

/// Record layout of an import file, derived from its header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Schema {
    /// `WELLNAME X Y DATUM KB MAXIMUM_DEPTH`
    WellLocation,
    /// `WELLNAME X Y Z MD MARKERNAME`
    Marker,
    /// Header matched neither layout; no records are produced
    Unknown,
}

impl Schema {
    /// Field names in column order, or an empty slice for `Unknown`
    pub fn fields(self) -> &'static [FieldName] {
        match self {
            Schema::WellLocation => &[
                FieldName::WellName,
                FieldName::X,
                FieldName::Y,
                FieldName::Datum,
                FieldName::Kb,
                FieldName::MaximumDepth,
            ],
            Schema::Marker => &[
                FieldName::WellName,
                FieldName::X,
                FieldName::Y,
                FieldName::Z,
                FieldName::MeasuredDepth,
                FieldName::MarkerName,
            ],
            Schema::Unknown => &[],
        }
    }

    pub fn is_known(self) -> bool {
        self != Schema::Unknown
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Schema::WellLocation => "well locations",
            Schema::Marker => "markers",
            Schema::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Named field of a well or marker record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldName {
    WellName,
    X,
    Y,
    Datum,
    Kb,
    MaximumDepth,
    Z,
    MeasuredDepth,
    MarkerName,
}

impl FieldName {
    /// Column name as written in export headers
    pub fn header_name(self) -> &'static str {
        match self {
            FieldName::WellName => "WELLNAME",
            FieldName::X => "X",
            FieldName::Y => "Y",
            FieldName::Datum => "DATUM",
            FieldName::Kb => "KB",
            FieldName::MaximumDepth => "MAXIMUM_DEPTH",
            FieldName::Z => "Z",
            FieldName::MeasuredDepth => "MD",
            FieldName::MarkerName => "MARKERNAME",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header_name())
    }
}

/// Detect the schema of an import file from its header tokens
pub fn detect_schema(header_tokens: &[&str], min_fields: usize) -> Schema {
    if header_tokens.len() < min_fields {
        return Schema::Unknown;
    }

    let matches = |schema: &Schema| {
        let fields = schema.fields();
        header_tokens.len() >= fields.len()
            && fields
                .iter()
                .zip(header_tokens)
                .all(|(field, token)| field.header_name().eq_ignore_ascii_case(token))
    };

    [Schema::WellLocation, Schema::Marker]
        .into_iter()
        .find(matches)
        .unwrap_or(Schema::Unknown)
}
