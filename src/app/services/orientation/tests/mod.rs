//! Test utilities for orientation testing
//!
//! Triangle builders with analytically known dip and azimuth.

use crate::app::models::{Point3D, Triangle};

mod compass_tests;

pub fn triangle(p0: [f64; 3], p1: [f64; 3], p2: [f64; 3]) -> Triangle {
    Triangle::new(
        Point3D::from_array(p0),
        Point3D::from_array(p1),
        Point3D::from_array(p2),
    )
}

/// Plane through the origin descending towards `azimuth_deg` with the
/// given gradient (tangent of the dip)
pub fn descending_towards(azimuth_deg: f64, gradient: f64) -> Triangle {
    let (sin, cos) = azimuth_deg.to_radians().sin_cos();
    let (a, b) = (sin * gradient, cos * gradient);
    // Plane z = -a*x - b*y has upward normal (a, b, 1)
    triangle([0.0, 0.0, 0.0], [1.0, 0.0, -a], [0.0, 1.0, -b])
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
