use serde::Serialize;
use std::path::PathBuf;

use crate::error::SplitError;

/// Options for a single split operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Maximum data rows per output file, header excluded
    pub rows_per_chunk: usize,
    /// Output file name template with `{name}` and `{num}` placeholders
    pub name_template: String,
    /// Character whose presence marks a line as tabular
    pub separator: char,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            rows_per_chunk: 100_000,
            name_template: "{name}_{num}.csv".to_string(),
            separator: ',',
        }
    }
}

impl SplitOptions {
    /// Set the number of data rows per output file
    pub fn rows_per_chunk(mut self, rows: usize) -> Self {
        self.rows_per_chunk = rows;
        self
    }

    /// Set the output file name template
    pub fn name_template(mut self, template: impl Into<String>) -> Self {
        self.name_template = template.into();
        self
    }

    /// Set the field separator
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Reject options the engine cannot honor
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.rows_per_chunk == 0 {
            return Err(SplitError::InvalidOptions(
                "rows per chunk must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of splitting one source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    /// Source file that was split
    pub source: PathBuf,
    /// Number of output files written
    pub files_written: usize,
    /// Non-tabular lines discarded before the header
    pub preamble_lines_skipped: usize,
    /// Lines written after the header, across all output files
    pub data_lines: usize,
    /// Captured header line, if any tabular line was found
    pub header: Option<String>,
    /// Output files in sequence order
    pub output_files: Vec<PathBuf>,
}
