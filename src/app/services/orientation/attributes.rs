//! Orientation attribute rows for export consumers
//!
//! Export writers declare their columns once and then append one value per
//! column and triangle, in the same order. [`AttributeSelection`] fixes that
//! order; [`OrientationAttributes`] holds the values for one triangle.

use serde::{Deserialize, Serialize};

use super::calculator::Orientation;
use crate::Result;
use crate::app::models::Triangle;

/// Which orientation attributes are written, in column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeSelection {
    pub dip: bool,
    pub strike: bool,
    pub compass_direction: bool,
    pub clar_notation: bool,
}

impl Default for AttributeSelection {
    fn default() -> Self {
        Self {
            dip: true,
            strike: true,
            compass_direction: true,
            clar_notation: false,
        }
    }
}

impl AttributeSelection {
    /// Column names of the selected attributes, in write order
    pub fn column_names(&self) -> Vec<&'static str> {
        [
            (self.dip, "dip"),
            (self.strike, "strike"),
            (self.compass_direction, "compassDir"),
            (self.clar_notation, "clar"),
        ]
        .into_iter()
        .filter_map(|(selected, name)| selected.then_some(name))
        .collect()
    }
}

/// Single attribute value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

/// Selected orientation attributes of one triangle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrientationAttributes {
    /// Dip in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dip: Option<f64>,

    /// Azimuth in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<f64>,

    #[serde(rename = "compassDir", skip_serializing_if = "Option::is_none")]
    pub compass_direction: Option<String>,

    #[serde(rename = "clar", skip_serializing_if = "Option::is_none")]
    pub clar_notation: Option<String>,
}

impl OrientationAttributes {
    pub fn from_orientation(orientation: &Orientation, selection: &AttributeSelection) -> Self {
        Self {
            dip: selection.dip.then(|| orientation.dip()),
            strike: selection.strike.then(|| orientation.azimuth()),
            compass_direction: selection
                .compass_direction
                .then(|| orientation.compass_direction().to_string()),
            clar_notation: selection
                .clar_notation
                .then(|| orientation.clar_notation()),
        }
    }

    /// Attributes for a triangle given as `[x0, y0, z0, x1, ..., z2]`.
    ///
    /// The coordinates carry no reference system and are taken as Cartesian.
    pub fn from_coordinates(coords: &[f64; 9], selection: &AttributeSelection) -> Result<Self> {
        let orientation = Orientation::new(&Triangle::from_coordinates(coords))?;
        Ok(Self::from_orientation(&orientation, selection))
    }

    /// Values in column order, matching [`AttributeSelection::column_names`]
    pub fn values(&self) -> Vec<AttributeValue> {
        let mut values = Vec::with_capacity(4);
        if let Some(dip) = self.dip {
            values.push(AttributeValue::Number(dip));
        }
        if let Some(strike) = self.strike {
            values.push(AttributeValue::Number(strike));
        }
        if let Some(compass) = &self.compass_direction {
            values.push(AttributeValue::Text(compass.clone()));
        }
        if let Some(clar) = &self.clar_notation {
            values.push(AttributeValue::Text(clar.clone()));
        }
        values
    }
}
