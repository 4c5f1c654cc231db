//! Test utilities for well import testing
//!
//! This module provides a recording repository, sample export contents and
//! temp file helpers shared by the test modules below.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::app::models::{MarkerRecord, WellRecord};
use crate::app::services::well_repository::WellRepository;


/// Repository that records inserts in call order
#[derive(Debug, Default)]
pub struct RecordingRepository {
    pub wells: Vec<WellRecord>,
    pub markers: Vec<MarkerRecord>,
}

impl WellRepository for RecordingRepository {
    fn insert_well(&mut self, well: WellRecord) {
        self.wells.push(well);
    }

    fn insert_marker(&mut self, marker: MarkerRecord) {
        self.markers.push(marker);
    }
}

/// Well location export with a multi-word name and a double space
pub fn create_well_location_export() -> String {
    "WELLNAME X Y DATUM KB MAXIMUM_DEPTH\n\
     Well A  420000.0 5800000.0 100.0 5.0 350.0\n\
     B-12 419500.0 5799800.0 95.0 4.5 1200.0\n\
     Well 1  B 421000.0 5801000.0 110.0 6.0 800.0\n"
        .to_string()
}

/// Marker export whose well names contain the marker names
pub fn create_marker_export() -> String {
    "WellName   X   Y   Z   MD   MarkerName\n\
     B-12 Top Zechstein  419500.0 5799800.0 95.0 210.0 Top Zechstein\n\
     B-12 419500.0 5799800.0 -150.0 245.0 Base Zechstein\n"
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
