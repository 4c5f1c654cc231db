//! Data models for well import and orientation analysis
//!
//! This module contains the core value types shared by the importer, the well
//! repository and the orientation calculator: points, triangles, and the well
//! and marker records produced from survey exports.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Geometry
// =============================================================================

/// Immutable 3D point in a projected (Cartesian) coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a point from an `[x, y, z]` array
    pub const fn from_array(coords: [f64; 3]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Kind of spatial reference system a geometry is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReferenceSystem {
    /// No reference system assigned; coordinates are taken as Cartesian
    #[default]
    Unspecified,
    /// Projected system with metric axes (e.g. UTM, Gauss-Krüger)
    Projected,
    /// Geographic system with angular axes (latitude/longitude)
    Geographic,
}

/// Geometry contract consumed by the orientation calculator
pub trait TriangleGeometry {
    /// The three corner points in their given order
    fn corner_points(&self) -> [Point3D; 3];

    /// Whether the corners are given in an angular (geographic) system
    fn has_geographic_crs(&self) -> bool;
}

/// Triangle with order-significant corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    corners: [Point3D; 3],
    reference_system: ReferenceSystem,
}

impl Triangle {
    /// Create a triangle without an assigned reference system
    pub fn new(p0: Point3D, p1: Point3D, p2: Point3D) -> Self {
        Self {
            corners: [p0, p1, p2],
            reference_system: ReferenceSystem::Unspecified,
        }
    }

    /// Create a triangle from a flat `[x0, y0, z0, x1, ..., z2]` array
    pub fn from_coordinates(coords: &[f64; 9]) -> Self {
        Self::new(
            Point3D::new(coords[0], coords[1], coords[2]),
            Point3D::new(coords[3], coords[4], coords[5]),
            Point3D::new(coords[6], coords[7], coords[8]),
        )
    }

    /// Assign the reference system the corners are expressed in
    pub fn with_reference_system(mut self, reference_system: ReferenceSystem) -> Self {
        self.reference_system = reference_system;
        self
    }

    pub fn reference_system(&self) -> ReferenceSystem {
        self.reference_system
    }
}

impl TriangleGeometry for Triangle {
    fn corner_points(&self) -> [Point3D; 3] {
        self.corners
    }

    fn has_geographic_crs(&self) -> bool {
        self.reference_system == ReferenceSystem::Geographic
    }
}

// =============================================================================
// Well Survey Records
// =============================================================================

/// Well location parsed from one line of a well location export.
///
/// `position.z` carries the DATUM value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellRecord {
    pub name: String,
    pub position: Point3D,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<f64>,
}

/// Formation marker parsed from one line of a marker export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    pub well_name: String,
    pub location: Point3D,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measured_depth: Option<f64>,
    pub marker_name: String,
}

/// A well together with all markers imported for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Well {
    pub name: String,

    /// Wellhead position; `None` for wells only known from marker files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point3D>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kb: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<f64>,

    pub markers: Vec<MarkerRecord>,
}

impl Well {
    /// Well created from a location record, without markers
    pub fn from_record(record: WellRecord) -> Self {
        Self {
            name: record.name,
            position: Some(record.position),
            kb: record.kb,
            max_depth: record.max_depth,
            markers: Vec::new(),
        }
    }

    /// Placeholder well for markers whose well has no location record
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
            kb: None,
            max_depth: None,
            markers: Vec::new(),
        }
    }

    /// Whether a location record has been imported for this well
    pub fn has_location(&self) -> bool {
        self.position.is_some()
    }

    /// Find a marker by name (case-sensitive)
    pub fn marker(&self, marker_name: &str) -> Option<&MarkerRecord> {
        self.markers.iter().find(|m| m.marker_name == marker_name)
    }
}
