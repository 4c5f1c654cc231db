//! Application constants for the geologic toolbox
//!
//! This module contains the fixed field-name sequences used for header
//! sniffing, numeric thresholds, and default values used throughout the
//! importer and the orientation calculator.

// =============================================================================
// Import File Layout
// =============================================================================

/// Separator used when tokens are rejoined into well and marker names
pub const TOKEN_DELIMITER: &str = " ";

/// Minimum number of header tokens needed to identify a schema
pub const MIN_HEADER_FIELDS: usize = 6;

/// File extensions picked up when a directory is given as import input
pub const IMPORT_FILE_EXTENSIONS: &[&str] = &["csv", "txt", "dat"];

// =============================================================================
// Token Classification
// =============================================================================

/// Magnitude from which a number is taken as a projected (UTM-like)
/// coordinate rather than a depth or elevation attribute
pub const COORDINATE_THRESHOLD: f64 = 100_000.0;

/// Field offsets relative to the first coordinate token of a data line
pub mod field_offsets {
    /// Easting
    pub const X: usize = 0;
    /// Northing
    pub const Y: usize = 1;
    /// DATUM for well locations, Z for markers
    pub const ELEVATION: usize = 2;
    /// KB for well locations, MD for markers
    pub const FIRST_SCALAR: usize = 3;
    /// MAXIMUM_DEPTH for well locations, start of the marker name for markers
    pub const SECOND_SCALAR: usize = 4;
}

// =============================================================================
// Orientation
// =============================================================================

/// Compass point labels, clockwise from north
pub const COMPASS_LABELS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Compass direction reported for horizontal triangles
pub const NO_COMPASS_DIRECTION: &str = "-";

/// Angular width of one compass sector in degrees
pub const COMPASS_SECTOR_DEGREES: f64 = 45.0;

/// Demonstration triangle used by the `clar` command when no points are given
pub const DEMO_TRIANGLE: [[f64; 3]; 3] = [
    [420000.0, 5800000.0, 100.0],
    [420100.0, 5800000.0, 110.0],
    [419900.0, 5800100.0, 100.0],
];

// =============================================================================
// Logging
// =============================================================================

/// Tracing target prefix used by the CLI log filter
pub const LOG_TARGET: &str = "geologic_toolbox";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_sectors_cover_full_circle() {
        assert_eq!(COMPASS_LABELS.len() as f64 * COMPASS_SECTOR_DEGREES, 360.0);
    }
}
