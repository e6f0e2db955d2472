use std::path::PathBuf;
use thiserror::Error;

use serde::Serialize;

use crate::models::ConfigError;

/// Main error type for csvsplit
#[derive(Error, Debug)]
pub enum CsvSplitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Split failed: {0}")]
    Split(#[from] SplitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("The input directory '{0}' does not exist or is not a directory")]
    InputDirNotFound(PathBuf),

    #[error("{failed} of {total} file(s) failed to split")]
    FilesFailed { failed: usize, total: usize },
}

/// Stage of a split operation that an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitStage {
    Options,
    SourceOpen,
    SourceRead,
    SinkCreate,
    SinkWrite,
}

/// Errors raised by a single split operation
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Source file not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Failed to open source file {0}: {1}")]
    SourceOpen(PathBuf, std::io::Error),

    #[error("Failed to read source file {0}: {1}")]
    SourceRead(PathBuf, std::io::Error),

    #[error("Failed to create output file {0}: {1}")]
    SinkCreate(PathBuf, std::io::Error),

    #[error("Failed to write output file {0}: {1}")]
    SinkWrite(PathBuf, std::io::Error),

    #[error("Invalid split options: {0}")]
    InvalidOptions(String),
}

impl SplitError {
    /// Which stage of the split failed
    pub fn stage(&self) -> SplitStage {
        match self {
            SplitError::SourceNotFound(_) | SplitError::SourceOpen(..) => SplitStage::SourceOpen,
            SplitError::SourceRead(..) => SplitStage::SourceRead,
            SplitError::SinkCreate(..) => SplitStage::SinkCreate,
            SplitError::SinkWrite(..) => SplitStage::SinkWrite,
            SplitError::InvalidOptions(_) => SplitStage::Options,
        }
    }

    /// Classify a failure to open the source, separating a missing file
    pub(crate) fn source_open(path: PathBuf, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            SplitError::SourceNotFound(path)
        } else {
            SplitError::SourceOpen(path, err)
        }
    }
}

pub type Result<T> = std::result::Result<T, CsvSplitError>;
