//! Import file orchestration
//!
//! Opens the file, detects the schema from the first line and feeds every
//! following line through the line parser into a repository. The read is
//! strictly sequential and single-pass; the file handle is released before
//! any of the public functions return, on success and on error.
//!
//! Lines are decoded as UTF-8 with invalid bytes replaced, so exports written
//! in a legacy code page still import. Each such line gets a diagnostic.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

use super::line_parser::{LineOutcome, parse_line};
use super::schema::{Schema, detect_schema};
use super::stats::{DiagnosticKind, ImportResult, ImportStats};
use super::tokens::scan_tokens;
use crate::app::models::Well;
use crate::app::services::well_repository::{InMemoryWellRepository, WellRepository};
use crate::config::ImportConfig;
use crate::constants::TOKEN_DELIMITER;
use crate::{Error, Result};

/// Reader for whitespace-separated well location and marker exports
#[derive(Debug, Clone, Default)]
pub struct WellCsvReader {
    config: ImportConfig,
}

impl WellCsvReader {
    /// Create a reader with the given importer settings
    pub fn new(config: ImportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Read a file into a fresh repository and return its wells
    pub fn read(&self, path: &Path) -> Result<(Vec<Well>, ImportResult)> {
        let mut repository = InMemoryWellRepository::new();
        let result = self.add_to_repository(path, &mut repository)?;
        Ok((repository.into_wells(), result))
    }

    /// Import a file into an existing repository
    pub fn add_to_repository<R>(&self, path: &Path, repository: &mut R) -> Result<ImportResult>
    where
        R: WellRepository + ?Sized,
    {
        let source = path.display().to_string();
        info!("Importing well data from {}", source);

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                Error::file_not_found(source.clone())
            }
            _ => Error::io(format!("Failed to open file {}", source), e),
        })?;

        self.import_from_reader(&source, BufReader::new(file), repository)
    }

    /// Import from any buffered line source; `source` names it in errors
    pub fn import_from_reader<B, R>(
        &self,
        source: &str,
        mut reader: B,
        repository: &mut R,
    ) -> Result<ImportResult>
    where
        B: BufRead,
        R: WellRepository + ?Sized,
    {
        let mut stats = ImportStats::new();
        let mut buffer = Vec::new();

        // First line gives the field names
        let Some(header) = next_line(&mut reader, &mut buffer, source, 1)? else {
            return Err(Error::parse(source, 1, "missing header line"));
        };
        stats.lines_read = 1;

        let header_tokens = scan_tokens(&header.text);
        debug!("Field names: {:?}", header_tokens);

        let schema = detect_schema(&header_tokens, self.config.min_header_fields);
        info!("Detected schema: {}", schema);

        if schema == Schema::Unknown {
            warn!(
                "Unsupported field sequence in {}, no records will be imported",
                source
            );
            stats.record(
                1,
                DiagnosticKind::UnknownSchema {
                    header: header_tokens.join(TOKEN_DELIMITER),
                },
                false,
            );
        } else if header.lossy {
            stats.record(1, DiagnosticKind::InvalidEncoding, false);
        }

        while let Some(line) = next_line(&mut reader, &mut buffer, source, stats.lines_read + 1)? {
            let line_number = stats.lines_read + 1;
            stats.lines_read = line_number;

            if schema == Schema::Unknown {
                continue;
            }

            if line.lossy {
                debug!("Line {}: invalid UTF-8 replaced", line_number);
                stats.record(line_number, DiagnosticKind::InvalidEncoding, false);
            }
            let line = line.text;

            if line.trim().is_empty() {
                if !self.config.skip_blank_lines {
                    stats.lines_skipped += 1;
                    stats.record(line_number, DiagnosticKind::BlankLine, true);
                }
                continue;
            }

            let parsed = parse_line(&line, schema, self.config.coordinate_threshold);
            let skipped = parsed.is_skipped();

            for issue in parsed.issues {
                debug!("Line {}: {}", line_number, issue);
                stats.record(line_number, issue, skipped);
            }

            match parsed.outcome {
                LineOutcome::Well(well) => {
                    repository.insert_well(well);
                    stats.wells_imported += 1;
                }
                LineOutcome::Marker(marker) => {
                    repository.insert_marker(marker);
                    stats.markers_imported += 1;
                }
                LineOutcome::Skipped => {
                    stats.lines_skipped += 1;
                }
            }
        }

        info!(
            "Read {} lines from file \"{}\": {} wells, {} markers, {} lines skipped",
            stats.lines_read,
            source,
            stats.wells_imported,
            stats.markers_imported,
            stats.lines_skipped
        );

        Ok(ImportResult {
            source: source.to_string(),
            schema,
            stats,
        })
    }
}

/// One decoded input line
struct DecodedLine {
    text: String,
    /// Invalid UTF-8 sequences were replaced
    lossy: bool,
}

/// Read the next line without its `\n` or `\r\n` terminator.
///
/// Returns `None` at end of input. A read failure is an I/O error of the
/// source at that line.
fn next_line<B: BufRead>(
    reader: &mut B,
    buffer: &mut Vec<u8>,
    source: &str,
    line_number: usize,
) -> Result<Option<DecodedLine>> {
    buffer.clear();
    let read = reader.read_until(b'\n', buffer).map_err(|e| {
        Error::io(format!("Failed to read {} at line {}", source, line_number), e)
    })?;
    if read == 0 {
        return Ok(None);
    }

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
    }

    let line = match String::from_utf8_lossy(buffer) {
        Cow::Borrowed(text) => DecodedLine {
            text: text.to_string(),
            lossy: false,
        },
        Cow::Owned(text) => DecodedLine { text, lossy: true },
    };
    Ok(Some(line))
}
