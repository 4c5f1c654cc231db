//! Clar command implementation
//!
//! Computes the orientation of one triangle and prints its degeneracy flags,
//! dip, azimuth, Clar notation and compass direction.

use crate::app::models::{ReferenceSystem, Triangle, TriangleGeometry};
use crate::app::services::orientation::Orientation;
use crate::cli::args::{ClarArgs, OutputFormat};
use crate::cli::commands::shared::{setup_logging, to_json_report};
use crate::config::ToolboxConfig;
use crate::numeric::AngleUnit;
use crate::Result;
use colored::*;
use serde::Serialize;
use tracing::info;

/// Orientation report for one triangle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClarReport {
    pub triangle: Triangle,
    pub unit: AngleUnit,
    pub zero_area: bool,
    pub plain: bool,
    pub vertical: bool,
    pub dip: f64,
    pub azimuth: f64,
    pub clar: String,
    pub compass_direction: String,
    pub compass_direction_class: u8,
}

impl ClarReport {
    /// Compute the report for a triangle; angles are given in `unit`
    pub fn compute(triangle: Triangle, unit: AngleUnit) -> Result<Self> {
        let orientation = Orientation::new(&triangle)?;

        Ok(Self {
            triangle,
            unit,
            zero_area: orientation.has_zero_area(),
            plain: orientation.is_plain(),
            vertical: orientation.is_vertical(),
            dip: orientation.dip_in(unit),
            azimuth: orientation.azimuth_in(unit),
            clar: orientation.clar_notation(),
            compass_direction: orientation.compass_direction().to_string(),
            compass_direction_class: orientation.compass_direction_class(),
        })
    }
}

/// Configuration file values with the `--unit` flag applied on top
fn load_config(args: &ClarArgs) -> Result<ToolboxConfig> {
    let mut config = ToolboxConfig::load_or_default(args.config_file.as_deref())?;
    if let Some(unit) = args.unit {
        config = config.with_angle_unit(unit);
    }
    Ok(config)
}

/// Run the clar command
pub fn run_clar(args: ClarArgs) -> Result<ClarReport> {
    setup_logging(args.get_log_level(), false)?;

    let unit = load_config(&args)?.angle_unit;

    let [p1, p2, p3] = args.corners();
    let reference_system = if args.geographic {
        ReferenceSystem::Geographic
    } else {
        ReferenceSystem::Projected
    };
    let triangle = Triangle::new(p1, p2, p3).with_reference_system(reference_system);

    if args.uses_demo_triangle() {
        info!("No corners given, using the demonstration triangle");
    }

    let report = ClarReport::compute(triangle, unit)?;

    match args.output_format {
        OutputFormat::Human => print_human_report(&report),
        OutputFormat::Json => println!("{}", to_json_report(&report)?),
    }

    Ok(report)
}

fn print_human_report(report: &ClarReport) {
    let [p1, p2, p3] = report.triangle.corner_points();
    let symbol = report.unit.symbol();

    println!("\n{}", "Triangle Orientation".bright_green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   • P1: {}", p1);
    println!("   • P2: {}", p2);
    println!("   • P3: {}", p3);
    println!(
        "   • Zero area: {}  Plain: {}  Vertical: {}",
        report.zero_area, report.plain, report.vertical
    );
    println!("   • Dip: {:.4} {}", report.dip, symbol);
    println!("   • Azimuth: {:.4} {}", report.azimuth, symbol);
    println!(
        "   • Clar notation: {}",
        report.clar.bright_white().bold()
    );
    println!(
        "   • Compass direction: {} (class {})",
        report.compass_direction.bright_cyan(),
        report.compass_direction_class
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::app::models::Point3D;
    use crate::constants::DEMO_TRIANGLE;
    use clap::Parser;
    use std::io::Write;

    fn demo_triangle() -> Triangle {
        let [p1, p2, p3] = DEMO_TRIANGLE.map(Point3D::from_array);
        Triangle::new(p1, p2, p3)
    }

    #[test]
    fn test_demo_triangle_report() {
        let report = ClarReport::compute(demo_triangle(), AngleUnit::Degree).unwrap();

        assert_eq!(report.clar, "225/8");
        assert_eq!(report.compass_direction, "SW");
        assert_eq!(report.compass_direction_class, 6);
        assert!(!report.plain && !report.vertical && !report.zero_area);
        assert!((report.azimuth - 225.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_in_gon() {
        let report = ClarReport::compute(demo_triangle(), AngleUnit::Gon).unwrap();

        assert!((report.azimuth - 250.0).abs() < 1e-9);
        // Clar notation stays in degrees
        assert_eq!(report.clar, "225/8");
    }

    #[test]
    fn test_geographic_triangle_fails() {
        let triangle = demo_triangle().with_reference_system(ReferenceSystem::Geographic);
        let result = ClarReport::compute(triangle, AngleUnit::Degree);
        assert!(matches!(result, Err(Error::CrsIncompatibility { .. })));
    }

    #[test]
    fn test_unit_flag_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "angle_unit = \"radian\"").unwrap();
        let path = file.path().to_str().unwrap();

        let args = ClarArgs::try_parse_from(["clar", "-c", path]).unwrap();
        assert_eq!(load_config(&args).unwrap().angle_unit, AngleUnit::Radian);

        let args = ClarArgs::try_parse_from(["clar", "-c", path, "--unit", "gon"]).unwrap();
        assert_eq!(load_config(&args).unwrap().angle_unit, AngleUnit::Gon);

        let args = ClarArgs::try_parse_from(["clar"]).unwrap();
        assert_eq!(load_config(&args).unwrap().angle_unit, AngleUnit::Degree);
    }

    #[test]
    fn test_report_serializes() {
        let report = ClarReport::compute(demo_triangle(), AngleUnit::Degree).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&to_json_report(&report).unwrap()).unwrap();

        assert_eq!(json["clar"], "225/8");
        assert_eq!(json["unit"], "degree");
        assert_eq!(json["compass_direction"], "SW");
    }
}
