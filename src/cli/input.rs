//! Input discovery for the import command
//!
//! Expands the command-line inputs into an ordered list of files. Each input
//! is an existing file, a directory searched recursively for import files, or
//! a glob pattern.

use crate::constants::IMPORT_FILE_EXTENSIONS;
use crate::{Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Resolve inputs to files, keeping command-line order and dropping duplicates
pub fn resolve_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for input in inputs {
        let resolved = resolve_input(input)?;
        debug!("Input '{}' resolved to {} file(s)", input, resolved.len());

        for file in resolved {
            if seen.insert(file.clone()) {
                files.push(file);
            }
        }
    }

    if files.is_empty() {
        return Err(Error::configuration(format!(
            "No import files found for: {}",
            inputs.join(", ")
        )));
    }

    info!("Discovered {} import file(s)", files.len());
    Ok(files)
}

fn resolve_input(input: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(input);

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if path.is_dir() {
        return scan_directory(path);
    }
    if is_glob_pattern(input) {
        return expand_glob(input);
    }

    Err(Error::file_not_found(input))
}

/// Recursively collect import files below `dir`, sorted by path
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            Error::directory_traversal(format!("Failed to scan {}", dir.display()), e)
        })?;
        let path = entry.path();

        if path.is_file() && has_import_extension(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in glob::glob(pattern)? {
        let path = entry.map_err(|e| {
            let path = e.path().display().to_string();
            Error::io(format!("Failed to read {}", path), e.into_error())
        })?;
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// True for `.csv`, `.txt` and `.dat` files (case-insensitive)
pub fn has_import_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMPORT_FILE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("wells.txt"), "WellName X Y DATUM KB MAXIMUM_DEPTH\n").unwrap();
        fs::write(dir.path().join("notes.md"), "not an export\n").unwrap();
        fs::create_dir(dir.path().join("markers")).unwrap();
        fs::write(
            dir.path().join("markers").join("tops.DAT"),
            "WellName X Y Z MD MarkerName\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_has_import_extension() {
        assert!(has_import_extension(Path::new("a.csv")));
        assert!(has_import_extension(Path::new("a.TXT")));
        assert!(has_import_extension(Path::new("dir/a.dat")));
        assert!(!has_import_extension(Path::new("a.md")));
        assert!(!has_import_extension(Path::new("csv")));
    }

    #[test]
    fn test_directory_is_scanned_recursively() {
        let dir = create_tree();
        let files = scan_directory(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.ends_with("wells.txt")));
        assert!(files.iter().any(|f| f.ends_with("markers/tops.DAT")));
    }

    #[test]
    fn test_resolve_keeps_order_and_deduplicates() {
        let dir = create_tree();
        let wells = dir.path().join("wells.txt").display().to_string();
        let all = dir.path().display().to_string();

        let files = resolve_inputs(&[wells.clone(), all]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("wells.txt"));
        assert!(files[1].ends_with("tops.DAT"));
    }

    #[test]
    fn test_glob_pattern() {
        let dir = create_tree();
        let pattern = format!("{}/*.txt", dir.path().display());

        let files = resolve_inputs(&[pattern]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("wells.txt"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = resolve_inputs(&["/nonexistent/wells.txt".to_string()]);
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_no_matches_is_configuration_error() {
        let dir = create_tree();
        let pattern = format!("{}/*.csv", dir.path().display());

        let result = resolve_inputs(&[pattern]);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = resolve_inputs(&["[unclosed".to_string()]);
        assert!(matches!(result, Err(Error::Pattern { .. })));
    }
}
