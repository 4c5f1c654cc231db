//! Dip and azimuth of a triangle from its upward-facing normal
//!
//! For the x-axis heading east and the y-axis heading north, azimuth runs
//! clockwise from north: N = 0°, E = 90°, S = 180°, W = 270°. It is the
//! bearing of the normal's horizontal projection, i.e. the downslope
//! direction.

use std::f64::consts::{FRAC_PI_2, PI};

use super::compass::CompassDirection;
use super::vector::Vector3;
use crate::app::models::TriangleGeometry;
use crate::constants::NO_COMPASS_DIRECTION;
use crate::numeric::{AngleUnit, RAD_TO_DEG, RAD_TO_GON, round_half_up};
use crate::{Error, Result};

const UP: Vector3 = Vector3::new(0.0, 0.0, 1.0);

/// Orientation of a triangle, immutable after construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    dir: Vector3,
    dip_rad: f64,
}

impl Orientation {
    /// Compute the orientation of a triangle.
    ///
    /// Fails for triangles in a geographic reference system since angular
    /// axes make the cross product meaningless.
    pub fn new<T>(triangle: &T) -> Result<Self>
    where
        T: TriangleGeometry + ?Sized,
    {
        if triangle.has_geographic_crs() {
            return Err(Error::crs_incompatibility(
                "Orientation object construction failed: triangle coordinates \
                 refer to a geographic reference system",
            ));
        }

        let dir = Self::direction(triangle);
        let dip_rad = Self::compute_dip(dir)?;
        Ok(Self { dir, dip_rad })
    }

    /// Upward-facing normal (not normalised; length is twice the area)
    fn direction<T>(triangle: &T) -> Vector3
    where
        T: TriangleGeometry + ?Sized,
    {
        let [p0, p1, p2] = triangle.corner_points();
        let normal = Vector3::between(p0, p1).cross(Vector3::between(p0, p2));
        if normal.z < 0.0 { -normal } else { normal }
    }

    fn compute_dip(dir: Vector3) -> Result<f64> {
        if dir.length() == 0.0 {
            return Ok(0.0);
        }
        if dir.z == 0.0 {
            return Ok(FRAC_PI_2);
        }

        // Angle between the surface and the horizontal plane equals the
        // angle between its normal and the vertical axis.
        let dip = dir.angle(UP);
        if !(0.0..=FRAC_PI_2).contains(&dip) {
            return Err(Error::numeric_invariant(format!(
                "dip {} rad outside [0, π/2] for normal ({}, {}, {})",
                dip, dir.x, dir.y, dir.z
            )));
        }
        Ok(dip)
    }

    /// The corrected surface normal
    pub fn direction_vector(&self) -> Vector3 {
        self.dir
    }

    /// True for degenerate (collinear or coincident) triangles.
    ///
    /// Implies both [`is_plain`](Self::is_plain) and
    /// [`is_vertical`](Self::is_vertical).
    pub fn has_zero_area(&self) -> bool {
        self.dir.length() == 0.0
    }

    /// True for horizontal triangles (and zero-area ones)
    pub fn is_plain(&self) -> bool {
        self.dir.x == 0.0 && self.dir.y == 0.0
    }

    /// True for triangles parallel to the z-axis (and zero-area ones)
    pub fn is_vertical(&self) -> bool {
        self.dir.z == 0.0
    }

    // -------------------------------------------------------------------------
    // Dip
    // -------------------------------------------------------------------------

    /// Dip in radians, `0..=π/2`
    pub fn dip_rad(&self) -> f64 {
        self.dip_rad
    }

    /// Dip in degrees, `0..=90`
    pub fn dip(&self) -> f64 {
        self.dip_rad * RAD_TO_DEG
    }

    pub fn dip_int(&self) -> i32 {
        round_half_up(self.dip()) as i32
    }

    /// Dip in gon, `0..=100`
    pub fn dip_gon(&self) -> f64 {
        self.dip_rad * RAD_TO_GON
    }

    pub fn dip_gon_int(&self) -> i32 {
        round_half_up(self.dip_gon()) as i32
    }

    pub fn dip_in(&self, unit: AngleUnit) -> f64 {
        unit.from_radians(self.dip_rad)
    }

    // -------------------------------------------------------------------------
    // Azimuth
    // -------------------------------------------------------------------------

    /// Azimuth in radians, `0 <= azimuth < 2π`; 0 for plain triangles
    pub fn azimuth_rad(&self) -> f64 {
        if self.has_zero_area() || self.is_plain() {
            return 0.0;
        }

        // Due north or due south; avoids the angle computation
        if self.dir.x == 0.0 {
            return if self.dir.y > 0.0 { 0.0 } else { PI };
        }

        let phi = Vector3::NORTH.angle(self.dir.horizontal());
        if self.dir.x > 0.0 { phi } else { 2.0 * PI - phi }
    }

    /// Azimuth in degrees, `0 <= azimuth < 360`
    pub fn azimuth(&self) -> f64 {
        self.azimuth_rad() * RAD_TO_DEG
    }

    /// Azimuth rounded to whole degrees, `0..=359`
    pub fn azimuth_int(&self) -> i32 {
        wrap_rounded(self.azimuth(), 360)
    }

    /// Azimuth in gon, `0 <= azimuth < 400`
    pub fn azimuth_gon(&self) -> f64 {
        self.azimuth_rad() * RAD_TO_GON
    }

    /// Azimuth rounded to whole gon, `0..=399`
    pub fn azimuth_gon_int(&self) -> i32 {
        wrap_rounded(self.azimuth_gon(), 400)
    }

    pub fn azimuth_in(&self, unit: AngleUnit) -> f64 {
        unit.from_radians(self.azimuth_rad())
    }

    // -------------------------------------------------------------------------
    // Derived notations
    // -------------------------------------------------------------------------

    /// Clar notation `azimuth/dip` in whole degrees, e.g. "135/8"
    pub fn clar_notation(&self) -> String {
        format!("{}/{}", self.azimuth_int(), self.dip_int())
    }

    /// Compass point of the azimuth, `None` for plain triangles
    pub fn compass(&self) -> Option<CompassDirection> {
        if self.is_plain() {
            None
        } else {
            Some(CompassDirection::from_azimuth_degrees(self.azimuth()))
        }
    }

    /// "N", "NE", ..., "NW", or "-" for plain triangles
    pub fn compass_direction(&self) -> &'static str {
        self.compass()
            .map_or(NO_COMPASS_DIRECTION, CompassDirection::label)
    }

    /// 1 (N) to 8 (NW), or 0 for plain triangles
    pub fn compass_direction_class(&self) -> u8 {
        self.compass().map_or(0, CompassDirection::class)
    }
}

fn wrap_rounded(value: f64, full_circle: i64) -> i32 {
    let rounded = round_half_up(value);
    (if rounded >= full_circle { 0 } else { rounded }) as i32
}
