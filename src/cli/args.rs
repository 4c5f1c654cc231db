//! Command-line argument definitions for the geologic toolbox
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::Point3D;
use crate::constants::DEMO_TRIANGLE;
use crate::numeric::AngleUnit;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the geologic toolbox
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geologic-toolbox",
    version,
    about = "Import well survey exports and compute triangle orientations",
    long_about = "Imports whitespace-separated well location and marker exports whose \
                  schema is detected from the header line, recovering multi-word names and \
                  reporting unusable lines as diagnostics. Also computes dip, azimuth, \
                  compass direction and Clar notation for triangles."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import well location and marker exports into one repository
    Import(ImportArgs),
    /// Compute the orientation of a triangle in Clar notation
    Clar(ClarArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Files, directories or glob patterns to import
    ///
    /// Directories are searched recursively for .csv, .txt and .dat files.
    /// All inputs are imported into the same repository in the given order,
    /// so marker files should follow the location files they refer to.
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Magnitude from which numeric tokens count as coordinates
    #[arg(
        short = 't',
        long = "coordinate-threshold",
        value_name = "VALUE",
        allow_negative_numbers = true,
        help = "Override the coordinate magnitude threshold (default 100000)"
    )]
    pub coordinate_threshold: Option<f64>,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// List every imported well with its markers
    #[arg(long = "detailed", help = "List imported wells and markers")]
    pub detailed: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the import report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the clar command
#[derive(Debug, Clone, Parser)]
pub struct ClarArgs {
    /// First corner as X,Y,Z
    #[arg(long = "p1", value_name = "X,Y,Z", allow_hyphen_values = true)]
    pub p1: Option<CoordinateTriple>,

    /// Second corner as X,Y,Z
    #[arg(long = "p2", value_name = "X,Y,Z", allow_hyphen_values = true)]
    pub p2: Option<CoordinateTriple>,

    /// Third corner as X,Y,Z
    #[arg(long = "p3", value_name = "X,Y,Z", allow_hyphen_values = true)]
    pub p3: Option<CoordinateTriple>,

    /// Treat the coordinates as longitude/latitude
    #[arg(long = "geographic", help = "Coordinates refer to a geographic reference system")]
    pub geographic: bool,

    /// Unit for dip and azimuth in the report
    #[arg(long = "unit", value_enum, help = "Angle unit for dip and azimuth")]
    pub unit: Option<AngleUnit>,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Output format for the orientation report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Point given on the command line as `X,Y,Z`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTriple(pub Point3D);

impl FromStr for CoordinateTriple {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(Error::configuration(format!(
                "Point must be in format X,Y,Z, got '{}'",
                s
            )));
        }

        let mut values = [0.0; 3];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| Error::configuration(format!("Invalid coordinate '{}'", part)))?;
        }

        Ok(CoordinateTriple(Point3D::from_array(values)))
    }
}

impl ImportArgs {
    /// Validate the import command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(threshold) = self.coordinate_threshold {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(Error::configuration(format!(
                    "Coordinate threshold must be a positive number, got {}",
                    threshold
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            log_level_for(self.verbose)
        }
    }

    /// Progress bars are hidden in quiet mode and for machine-readable output
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl ClarArgs {
    /// The three corners, falling back to the demonstration triangle
    pub fn corners(&self) -> [Point3D; 3] {
        let [d1, d2, d3] = DEMO_TRIANGLE.map(Point3D::from_array);
        [
            self.p1.map_or(d1, |p| p.0),
            self.p2.map_or(d2, |p| p.0),
            self.p3.map_or(d3, |p| p.0),
        ]
    }

    /// True when no corner was given on the command line
    pub fn uses_demo_triangle(&self) -> bool {
        self.p1.is_none() && self.p2.is_none() && self.p3.is_none()
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }
}

fn log_level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_coordinate_triple_parsing() {
        let point = CoordinateTriple::from_str("420000, 5800000,-100.5").unwrap();
        assert_eq!(point.0, Point3D::new(420000.0, 5800000.0, -100.5));

        assert!(CoordinateTriple::from_str("1,2").is_err());
        assert!(CoordinateTriple::from_str("1,2,3,4").is_err());
        assert!(CoordinateTriple::from_str("1,x,3").is_err());
        assert!(CoordinateTriple::from_str("1,NaN,3").is_err());
    }

    #[test]
    fn test_import_command_parsing() {
        let args = parse(&[
            "geologic-toolbox",
            "import",
            "wells.txt",
            "markers/*.dat",
            "-t",
            "50000",
            "--output-format",
            "json",
        ]);

        match args.command {
            Some(Commands::Import(import)) => {
                assert_eq!(import.inputs, vec!["wells.txt", "markers/*.dat"]);
                assert_eq!(import.coordinate_threshold, Some(50000.0));
                assert_eq!(import.output_format, OutputFormat::Json);
                assert!(!import.show_progress());
                assert!(import.validate().is_ok());
            }
            other => panic!("expected import command, got {:?}", other),
        }
    }

    #[test]
    fn test_import_requires_input() {
        assert!(Args::try_parse_from(["geologic-toolbox", "import"]).is_err());
    }

    #[test]
    fn test_import_validation() {
        let args = parse(&["geologic-toolbox", "import", "a.txt", "-t", "-5"]);
        let Some(Commands::Import(import)) = args.command else {
            panic!("expected import command");
        };
        assert!(import.validate().is_err());

        let args = parse(&["geologic-toolbox", "import", "a.txt", "-c", "/nonexistent.toml"]);
        let Some(Commands::Import(import)) = args.command else {
            panic!("expected import command");
        };
        assert!(import.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let args = parse(&["geologic-toolbox", "import", "a.txt"]);
        let Some(Commands::Import(mut import)) = args.command else {
            panic!("expected import command");
        };

        assert_eq!(import.get_log_level(), "warn");
        assert!(import.show_progress());

        import.verbose = 1;
        assert_eq!(import.get_log_level(), "info");

        import.verbose = 2;
        assert_eq!(import.get_log_level(), "debug");

        import.verbose = 3;
        assert_eq!(import.get_log_level(), "trace");

        import.quiet = true;
        assert_eq!(import.get_log_level(), "error");
        assert!(!import.show_progress());
    }

    #[test]
    fn test_clar_defaults_to_demo_triangle() {
        let args = parse(&["geologic-toolbox", "clar"]);
        let Some(Commands::Clar(clar)) = args.command else {
            panic!("expected clar command");
        };

        assert!(clar.uses_demo_triangle());
        assert_eq!(clar.corners()[0], Point3D::new(420000.0, 5800000.0, 100.0));
        assert_eq!(clar.unit, None);
    }

    #[test]
    fn test_clar_custom_points() {
        let args = parse(&[
            "geologic-toolbox",
            "clar",
            "--p1",
            "0,0,0",
            "--p3",
            "-5,10,-2",
            "--unit",
            "gon",
            "--geographic",
        ]);
        let Some(Commands::Clar(clar)) = args.command else {
            panic!("expected clar command");
        };

        assert!(!clar.uses_demo_triangle());
        assert!(clar.geographic);
        assert_eq!(clar.unit, Some(AngleUnit::Gon));

        let [p1, p2, p3] = clar.corners();
        assert_eq!(p1, Point3D::new(0.0, 0.0, 0.0));
        assert_eq!(p2, Point3D::new(420100.0, 5800000.0, 110.0));
        assert_eq!(p3, Point3D::new(-5.0, 10.0, -2.0));
    }
}
