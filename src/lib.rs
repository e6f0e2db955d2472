//! csvsplit - split large delimited text files into header-preserving chunks
//!
//! Each output file holds at most a configured number of data rows and starts
//! with the header row of its source. Non-tabular preamble lines before the
//! header are skipped.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (directory split driver)
//! - **core**: Core functionality (classifier, naming, sinks, split engine, discovery, config)
//! - **models**: Data structures (config, split options, split report)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{CsvSplitError, Result, SplitError, SplitStage};
