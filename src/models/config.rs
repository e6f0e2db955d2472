use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::SplitOptions;

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "csvsplit.toml";

/// Configuration loaded from csvsplit.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub split: SplitConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Data rows per output file (excluding the header)
    #[serde(default = "default_rows_per_chunk")]
    pub rows_per_chunk: usize,
    /// Output file name template with `{name}` and `{num}` placeholders
    #[serde(default = "default_name_template")]
    pub name_template: String,
    /// Field separator used to detect tabular lines
    #[serde(default = "default_separator")]
    pub separator: char,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            rows_per_chunk: default_rows_per_chunk(),
            name_template: default_name_template(),
            separator: default_separator(),
        }
    }
}

fn default_rows_per_chunk() -> usize {
    100_000
}

fn default_name_template() -> String {
    "{name}_{num}.csv".to_string()
}

fn default_separator() -> char {
    ','
}

/// Source discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Extension of source files to split (without the dot)
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Output directory name, relative to the input directory
    #[serde(default = "default_output_subdir")]
    pub output_subdir: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            output_subdir: default_output_subdir(),
        }
    }
}

fn default_extension() -> String {
    "csv".to_string()
}

fn default_output_subdir() -> String {
    "outs".to_string()
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from csvsplit.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(
        mut self,
        rows_per_chunk: Option<usize>,
        name_template: Option<String>,
        separator: Option<char>,
        extension: Option<String>,
    ) -> Self {
        if let Some(r) = rows_per_chunk {
            self.split.rows_per_chunk = r;
        }
        if let Some(t) = name_template {
            self.split.name_template = t;
        }
        if let Some(s) = separator {
            self.split.separator = s;
        }
        if let Some(e) = extension {
            self.discovery.extension = e.trim_start_matches('.').to_string();
        }
        self
    }

    /// Options handed to the split engine for every file
    pub fn split_options(&self) -> SplitOptions {
        SplitOptions {
            rows_per_chunk: self.split.rows_per_chunk,
            name_template: self.split.name_template.clone(),
            separator: self.split.separator,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
}
