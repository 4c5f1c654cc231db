//! Minimal 3D vector algebra for orientation computations.

use crate::app::models::Point3D;
use std::ops::{Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const NORTH: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Vector from `from` to `to`
    pub fn between(from: Point3D, to: Point3D) -> Self {
        Self::new(to.x - from.x, to.y - from.y, to.z - from.z)
    }

    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Projection onto the xy-plane
    pub fn horizontal(self) -> Vector3 {
        Vector3::new(self.x, self.y, 0.0)
    }

    /// Unsigned angle to `other` in radians, in `[0, π]`.
    ///
    /// The cosine is clamped so rounding noise on (anti)parallel vectors
    /// cannot produce NaN. Zero-length input yields NaN.
    pub fn angle(self, other: Vector3) -> f64 {
        let cos = self.dot(other) / (self.length() * other.length());
        cos.clamp(-1.0, 1.0).acos()
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
