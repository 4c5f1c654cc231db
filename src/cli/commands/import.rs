//! Import command implementation
//!
//! Imports every resolved input file into one in-memory repository, in the
//! order given, and reports per-file statistics and diagnostics.

use crate::app::models::Well;
use crate::app::services::well_csv_reader::{ImportResult, WellCsvReader};
use crate::app::services::well_repository::InMemoryWellRepository;
use crate::cli::args::{ImportArgs, OutputFormat};
use crate::cli::commands::shared::{
    create_progress_bar, format_percentage, setup_logging, to_json_report,
};
use crate::cli::input::resolve_inputs;
use crate::config::ToolboxConfig;
use crate::Result;
use colored::*;
use indicatif::HumanDuration;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Diagnostics listed per file in the human report
const MAX_LISTED_DIAGNOSTICS: usize = 10;

/// Outcome of an import run across all input files
#[derive(Debug)]
pub struct ImportSummary {
    pub results: Vec<ImportResult>,
    pub repository: InMemoryWellRepository,
    pub elapsed: Duration,
}

impl ImportSummary {
    pub fn files_imported(&self) -> usize {
        self.results.len()
    }

    pub fn lines_skipped(&self) -> usize {
        self.results.iter().map(|r| r.stats.lines_skipped).sum()
    }

    pub fn diagnostics(&self) -> usize {
        self.results.iter().map(|r| r.stats.diagnostics.len()).sum()
    }

    /// Files whose header matched no known schema
    pub fn unknown_schema_files(&self) -> usize {
        self.results.iter().filter(|r| r.has_unknown_schema()).count()
    }

    /// Wells created only because a marker referenced them
    pub fn placeholder_wells(&self) -> usize {
        self.repository
            .wells()
            .iter()
            .filter(|w| !w.has_location())
            .count()
    }
}

/// Run the import command
pub fn run_import(args: ImportArgs) -> Result<ImportSummary> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let mut config = ToolboxConfig::load_or_default(args.config_file.as_deref())?;
    if let Some(threshold) = args.coordinate_threshold {
        config.import = config.import.with_coordinate_threshold(threshold);
    }
    config.validate()?;

    let files = resolve_inputs(&args.inputs)?;
    let reader = WellCsvReader::new(config.import)?;

    let summary = import_files(&reader, &files, args.show_progress())?;

    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                print_human_report(&summary, args.detailed);
            }
        }
        OutputFormat::Json => println!("{}", json_report(&summary, args.detailed)?),
    }

    Ok(summary)
}

/// Import files in order into a fresh repository
///
/// A fatal error in any file aborts the run.
pub fn import_files(
    reader: &WellCsvReader,
    files: &[PathBuf],
    show_progress: bool,
) -> Result<ImportSummary> {
    let start = Instant::now();
    let mut repository = InMemoryWellRepository::new();
    let mut results = Vec::with_capacity(files.len());

    let progress = (show_progress && files.len() > 1)
        .then(|| create_progress_bar(files.len() as u64, "Importing well data"));

    for file in files {
        if let Some(pb) = &progress {
            pb.set_message(file.display().to_string());
        }

        let result = match reader.add_to_repository(file, &mut repository) {
            Ok(result) => result,
            Err(e) => {
                if let Some(pb) = &progress {
                    pb.abandon();
                }
                return Err(e);
            }
        };

        if result.has_unknown_schema() {
            warn!("No records imported from {}: unknown schema", result.source);
        }
        results.push(result);

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let summary = ImportSummary {
        results,
        repository,
        elapsed: start.elapsed(),
    };
    info!(
        "Imported {} file(s): {} wells, {} markers",
        summary.files_imported(),
        summary.repository.well_count(),
        summary.repository.marker_count()
    );
    Ok(summary)
}

fn print_human_report(summary: &ImportSummary, detailed: bool) {
    println!("\n{}", "Import Summary".bright_green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for result in &summary.results {
        let stats = &result.stats;
        let schema = if result.has_unknown_schema() {
            result.schema.to_string().bright_red().bold()
        } else {
            result.schema.to_string().bright_white().bold()
        };

        println!("{} ({})", result.source.bright_cyan(), schema);
        println!(
            "   • Lines read: {} ({} data lines)",
            stats.lines_read,
            stats.data_lines()
        );
        println!(
            "   • Records imported: {} wells, {} markers ({})",
            stats.wells_imported,
            stats.markers_imported,
            format_percentage(stats.success_rate())
        );
        if stats.lines_skipped > 0 {
            println!(
                "   • Lines skipped: {}",
                stats.lines_skipped.to_string().bright_yellow().bold()
            );
        }

        for diagnostic in stats.diagnostics.iter().take(MAX_LISTED_DIAGNOSTICS) {
            println!("     {} {}", "!".yellow(), diagnostic);
        }
        if stats.diagnostics.len() > MAX_LISTED_DIAGNOSTICS {
            println!(
                "     ... and {} more",
                stats.diagnostics.len() - MAX_LISTED_DIAGNOSTICS
            );
        }
    }

    println!();
    println!("{}", "Repository:".bright_green().bold());
    println!(
        "   • Wells: {}",
        summary.repository.well_count().to_string().bright_white().bold()
    );
    println!(
        "   • Markers: {}",
        summary.repository.marker_count().to_string().bright_white().bold()
    );
    if summary.placeholder_wells() > 0 {
        println!(
            "   • Wells without location: {}",
            summary.placeholder_wells().to_string().bright_yellow()
        );
    }
    println!("   • Import time: {}", HumanDuration(summary.elapsed));

    if detailed {
        println!();
        for well in summary.repository.wells() {
            print_well(well);
        }
    }
    println!();
}

fn print_well(well: &Well) {
    let position = well
        .position
        .map_or_else(|| "no location".dimmed().to_string(), |p| p.to_string());
    println!("{} [{}]", well.name.bold(), position);

    for marker in &well.markers {
        let depth = marker
            .measured_depth
            .map_or_else(|| "-".to_string(), |md| format!("{:.2}", md));
        println!("   - {} (MD {}) at {}", marker.marker_name, depth, marker.location);
    }
}

fn json_report(summary: &ImportSummary, detailed: bool) -> Result<String> {
    let mut report = serde_json::json!({
        "files": summary.results,
        "files_imported": summary.files_imported(),
        "wells": summary.repository.well_count(),
        "markers": summary.repository.marker_count(),
        "wells_without_location": summary.placeholder_wells(),
        "lines_skipped": summary.lines_skipped(),
        "diagnostics": summary.diagnostics(),
        "unknown_schema_files": summary.unknown_schema_files(),
        "import_time_seconds": summary.elapsed.as_secs_f64(),
    });

    if detailed {
        report["repository"] = serde_json::to_value(summary.repository.wells())?;
    }

    to_json_report(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_inputs(dir: &TempDir) -> Vec<PathBuf> {
        let wells = dir.path().join("wells.txt");
        fs::write(
            &wells,
            "WellName X Y DATUM KB MAXIMUM_DEPTH\n\
             Well A 420000.0 5800000.0 55.0 60.0 2500.0\n\
             B-12 419500.0 5799800.0 48.0 52.5 1800.0\n",
        )
        .unwrap();

        let markers = dir.path().join("markers.txt");
        fs::write(
            &markers,
            "WellName X Y Z MD MarkerName\n\
             B-12 419500.0 5799800.0 -150.0 245.0 Base Zechstein\n\
             C-3 421000.0 5801000.0 -90.0 140.0 Top Buntsandstein\n\
             broken line\n",
        )
        .unwrap();

        let unknown = dir.path().join("other.txt");
        fs::write(&unknown, "A B C D E F\n1 2 3 4 5 6\n").unwrap();

        vec![wells, markers, unknown]
    }

    #[test]
    fn test_import_files_into_one_repository() {
        let dir = TempDir::new().unwrap();
        let files = write_inputs(&dir);

        let summary = import_files(&WellCsvReader::default(), &files, false).unwrap();

        assert_eq!(summary.files_imported(), 3);
        assert_eq!(summary.repository.well_count(), 3);
        assert_eq!(summary.repository.marker_count(), 2);
        assert_eq!(summary.placeholder_wells(), 1);
        assert_eq!(summary.lines_skipped(), 1);
        assert_eq!(summary.unknown_schema_files(), 1);

        let b12 = summary.repository.find_well("B-12").unwrap();
        assert!(b12.has_location());
        assert!(b12.marker("Base Zechstein").is_some());
    }

    #[test]
    fn test_json_report_fields() {
        let dir = TempDir::new().unwrap();
        let files = write_inputs(&dir);
        let summary = import_files(&WellCsvReader::default(), &files, false).unwrap();

        let report: serde_json::Value =
            serde_json::from_str(&json_report(&summary, true).unwrap()).unwrap();

        assert_eq!(report["wells"], 3);
        assert_eq!(report["markers"], 2);
        assert_eq!(report["files"].as_array().map(Vec::len), Some(3));
        assert_eq!(report["repository"].as_array().map(Vec::len), Some(3));

        let without_repository: serde_json::Value =
            serde_json::from_str(&json_report(&summary, false).unwrap()).unwrap();
        assert!(without_repository.get("repository").is_none());
    }

    #[test]
    fn test_fatal_error_aborts_run() {
        let dir = TempDir::new().unwrap();
        let mut files = write_inputs(&dir);
        files.insert(1, dir.path().join("missing.txt"));

        let result = import_files(&WellCsvReader::default(), &files, false);
        assert!(matches!(result, Err(crate::Error::FileNotFound { .. })));
    }
}
