//! Tests for compass bucketing

use super::super::calculator::Orientation;
use super::super::compass::CompassDirection;
use super::descending_towards;

#[test]
fn test_sector_centres() {
    let expected = [
        (0.0, "N", 1),
        (45.0, "NE", 2),
        (90.0, "E", 3),
        (135.0, "SE", 4),
        (180.0, "S", 5),
        (225.0, "SW", 6),
        (270.0, "W", 7),
        (315.0, "NW", 8),
    ];

    for (azimuth, label, class) in expected {
        let direction = CompassDirection::from_azimuth_degrees(azimuth);
        assert_eq!(direction.label(), label, "azimuth {}", azimuth);
        assert_eq!(direction.class(), class);
        assert_eq!(direction.to_string(), label);
    }
}

#[test]
fn test_sector_boundaries_round_half_up() {
    assert_eq!(CompassDirection::from_azimuth_degrees(22.4), CompassDirection::North);
    assert_eq!(CompassDirection::from_azimuth_degrees(22.5), CompassDirection::NorthEast);
    assert_eq!(CompassDirection::from_azimuth_degrees(67.5), CompassDirection::East);
    assert_eq!(CompassDirection::from_azimuth_degrees(337.4), CompassDirection::NorthWest);
    assert_eq!(CompassDirection::from_azimuth_degrees(337.5), CompassDirection::North);
    assert_eq!(CompassDirection::from_azimuth_degrees(359.0), CompassDirection::North);
}

#[test]
fn test_classes_follow_clockwise_order() {
    let classes: Vec<u8> = CompassDirection::ALL.iter().map(|d| d.class()).collect();
    assert_eq!(classes, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_orientation_compass_matches_azimuth() {
    for sector in 0..8 {
        let azimuth = sector as f64 * 45.0;
        let orient = Orientation::new(&descending_towards(azimuth, 0.2)).unwrap();
        let direction = orient.compass().unwrap();
        assert_eq!(direction, CompassDirection::ALL[sector]);
        assert_eq!(orient.compass_direction_class(), sector as u8 + 1);
    }
}

#[test]
fn test_serializes_as_label() {
    let json = serde_json::to_string(&CompassDirection::SouthWest).unwrap();
    assert_eq!(json, "\"SW\"");
}
