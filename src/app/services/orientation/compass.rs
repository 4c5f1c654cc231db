//! Eight-point compass bucketing of azimuth values.

use crate::constants::{COMPASS_LABELS, COMPASS_SECTOR_DEGREES};
use crate::numeric::round_half_up;
use serde::{Serialize, Serializer};
use std::fmt;

/// Compass point, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassDirection {
    pub const ALL: [CompassDirection; 8] = [
        CompassDirection::North,
        CompassDirection::NorthEast,
        CompassDirection::East,
        CompassDirection::SouthEast,
        CompassDirection::South,
        CompassDirection::SouthWest,
        CompassDirection::West,
        CompassDirection::NorthWest,
    ];

    /// Bucket an azimuth in degrees into its 45° sector.
    ///
    /// Sector boundaries round half up, so 22.5° is NE and 337.5° wraps to N.
    pub fn from_azimuth_degrees(azimuth: f64) -> Self {
        let sector = round_half_up(azimuth / COMPASS_SECTOR_DEGREES).rem_euclid(8);
        Self::ALL[sector as usize]
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Abbreviation such as "N" or "SW"
    pub fn label(self) -> &'static str {
        COMPASS_LABELS[self.index()]
    }

    /// Integer class 1 (N) to 8 (NW); 0 is reserved for horizontal surfaces
    pub fn class(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for CompassDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
