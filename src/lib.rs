//! Geologic Toolbox Library
//!
//! A Rust library for importing well survey exports and deriving geological
//! orientation attributes from triangulated surfaces.
//!
//! This library provides tools for:
//! - Importing whitespace-separated well location and marker exports (e.g. from
//!   GOCAD) whose schema is sniffed from the header line
//! - Recovering multi-word well and marker names from delimiter-ambiguous lines
//! - Collecting per-line diagnostics instead of aborting on bad rows
//! - Computing dip, azimuth, compass direction and Clar notation for triangles
//! - Comprehensive error handling with file and line context

pub mod config;
pub mod constants;
pub mod numeric;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod orientation;
        pub mod well_csv_reader;
        pub mod well_repository;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{MarkerRecord, Point3D, ReferenceSystem, Triangle, Well, WellRecord};
pub use app::services::orientation::Orientation;
pub use app::services::well_csv_reader::{Schema, WellCsvReader};
pub use app::services::well_repository::{InMemoryWellRepository, WellRepository};
pub use config::{ImportConfig, ToolboxConfig};

/// Result type alias for the geologic toolbox
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for import and orientation operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file missing or not accessible
    #[error("Could not access file \"{path}\"")]
    FileNotFound { path: String },

    /// Unexpected failure while processing a line of an import file
    #[error("Parser error in \"{file}\":{line}: {message}")]
    Parse {
        file: String,
        line: usize,
        message: String,
    },

    /// Orientation requested for geometry in an angular reference system
    #[error("Incompatible coordinate reference system: {message}")]
    CrsIncompatibility { message: String },

    /// A computed value left its mathematically guaranteed range
    #[error("Numerical computation error: {message}")]
    NumericInvariant { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Invalid glob pattern
    #[error("Invalid input pattern: {message}")]
    Pattern {
        message: String,
        #[source]
        source: glob::PatternError,
    },

    /// Serialization of reports or configuration failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a parse error for a 1-based line number
    pub fn parse(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a CRS incompatibility error
    pub fn crs_incompatibility(message: impl Into<String>) -> Self {
        Self::CrsIncompatibility {
            message: message.into(),
        }
    }

    /// Create a numeric invariant violation error
    pub fn numeric_invariant(message: impl Into<String>) -> Self {
        Self::NumericInvariant {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Fatal errors abort a whole import; everything else in this crate is
    /// recorded as a diagnostic instead.
    pub fn is_fatal_import_error(&self) -> bool {
        matches!(
            self,
            Error::Io { .. } | Error::FileNotFound { .. } | Error::Parse { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::Pattern {
            message: error.msg.to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid configuration file: {}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_converts_to_serialization() {
        let error: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(error, Error::Serialization { .. }));
        assert!(!error.is_fatal_import_error());
    }

    #[test]
    fn test_fatal_import_errors() {
        assert!(Error::parse("wells.txt", 1, "missing header line").is_fatal_import_error());
        assert!(!Error::configuration("bad threshold").is_fatal_import_error());
    }
}
