//! Orientation of triangulated surfaces
//!
//! Derives dip, azimuth, compass direction and Clar notation from the upward
//! facing normal of a triangle. Vertex winding is irrelevant: the normal is
//! flipped to point upwards, so dip always lies in 0..=90 degrees.
//!
//! - [`vector`] - Minimal 3D vector algebra
//! - [`calculator`] - The [`Orientation`] value and its angle queries
//! - [`compass`] - Eight-point compass bucketing
//! - [`attributes`] - Attribute rows for export consumers

pub mod attributes;
pub mod calculator;
pub mod compass;
pub mod vector;

#[cfg(test)]
pub mod tests;

pub use attributes::{AttributeSelection, OrientationAttributes};
pub use calculator::Orientation;
pub use compass::CompassDirection;
pub use vector::Vector3;
