//! Shared numeric utilities: angle unit conversion and rounding.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Radians to degrees
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Radians to gon (400 gon per full circle)
pub const RAD_TO_GON: f64 = 200.0 / PI;

/// Rounds to the nearest integer, ties towards positive infinity.
///
/// `f64::round` rounds ties away from zero, which differs for negative
/// inputs; all callers here want the same tie rule regardless of sign.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Angular units supported for dip and azimuth output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degree,
    Gon,
    Radian,
}

impl AngleUnit {
    /// Convert a radian value into this unit
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degree => radians * RAD_TO_DEG,
            AngleUnit::Gon => radians * RAD_TO_GON,
            AngleUnit::Radian => radians,
        }
    }

    /// Value of a full circle in this unit
    pub fn full_circle(self) -> f64 {
        match self {
            AngleUnit::Degree => 360.0,
            AngleUnit::Gon => 400.0,
            AngleUnit::Radian => 2.0 * PI,
        }
    }

    /// Short unit suffix for reports
    pub fn symbol(self) -> &'static str {
        match self {
            AngleUnit::Degree => "°",
            AngleUnit::Gon => "gon",
            AngleUnit::Radian => "rad",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_constants() {
        assert!((PI * RAD_TO_DEG - 180.0).abs() < 1e-12);
        assert!((PI * RAD_TO_GON - 200.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_half_up_ties() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(44.5), 45);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.5), -1);
    }

    #[test]
    fn test_angle_unit_conversion() {
        let quarter = PI / 2.0;
        assert!((AngleUnit::Degree.from_radians(quarter) - 90.0).abs() < 1e-12);
        assert!((AngleUnit::Gon.from_radians(quarter) - 100.0).abs() < 1e-12);
        assert_eq!(AngleUnit::Radian.from_radians(quarter), quarter);
        assert_eq!(AngleUnit::Gon.full_circle(), 400.0);
    }
}
