use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::CsvSplitError;

/// Find source files in `dir` whose extension matches `extension`.
///
/// Matching is case-insensitive. Subdirectories, including an output
/// directory nested in `dir`, are skipped. Results are sorted by path so runs
/// are reproducible.
pub fn discover_sources(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, CsvSplitError> {
    if !dir.is_dir() {
        return Err(CsvSplitError::InputDirNotFound(dir.to_path_buf()));
    }

    let wanted = extension.trim_start_matches('.');
    let mut sources = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if !path.is_file() {
            debug!("Skipping non-file entry: {}", path.display());
            continue;
        }

        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(wanted));
        if matches {
            sources.push(path);
        }
    }

    sources.sort();
    info!("Found {} {} file(s) in {}", sources.len(), wanted, dir.display());
    Ok(sources)
}
