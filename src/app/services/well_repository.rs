//! Well repository: the insert-only sink for imported records
//!
//! The importer only depends on the [`WellRepository`] trait. Implementations
//! must accept duplicate well names; the importer enforces no uniqueness.
//! Implementations are not required to be thread-safe, so imports that share
//! one repository must run one after another.

use crate::app::models::{MarkerRecord, Well, WellRecord};
use tracing::debug;

/// Insert contract consumed by the well importer
pub trait WellRepository {
    /// Store a well location
    fn insert_well(&mut self, well: WellRecord);

    /// Store a marker belonging to the well named `marker.well_name`
    fn insert_marker(&mut self, marker: MarkerRecord);
}

/// In-memory repository aggregating markers under their wells
///
/// Wells are kept in insertion order. A marker is attached to the most
/// recently inserted well of the same name; markers for wells without a
/// location record get a location-less placeholder well.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWellRepository {
    wells: Vec<Well>,
}

impl InMemoryWellRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// All wells in insertion order
    pub fn wells(&self) -> &[Well] {
        &self.wells
    }

    /// Consume the repository, returning its wells
    pub fn into_wells(self) -> Vec<Well> {
        self.wells
    }

    pub fn well_count(&self) -> usize {
        self.wells.len()
    }

    pub fn marker_count(&self) -> usize {
        self.wells.iter().map(|w| w.markers.len()).sum()
    }

    /// Most recently inserted well with the given name
    pub fn find_well(&self, name: &str) -> Option<&Well> {
        self.wells.iter().rev().find(|w| w.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }
}

impl WellRepository for InMemoryWellRepository {
    fn insert_well(&mut self, well: WellRecord) {
        self.wells.push(Well::from_record(well));
    }

    fn insert_marker(&mut self, marker: MarkerRecord) {
        let index = match self.wells.iter().rposition(|w| w.name == marker.well_name) {
            Some(index) => index,
            None => {
                debug!(
                    "No location for well '{}', creating placeholder for marker '{}'",
                    marker.well_name, marker.marker_name
                );
                self.wells.push(Well::placeholder(marker.well_name.clone()));
                self.wells.len() - 1
            }
        };
        self.wells[index].markers.push(marker);
    }
}
