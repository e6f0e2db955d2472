use std::path::Path;
use tracing::debug;

use crate::error::CsvSplitError;
use crate::models::Config;

/// Overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub rows_per_chunk: Option<usize>,
    pub name_template: Option<String>,
    pub separator: Option<char>,
    pub extension: Option<String>,
}

/// Load configuration with CLI overrides.
///
/// An explicit `config_file` must exist; otherwise csvsplit.toml in
/// `search_dir` is used when present.
pub fn load_config(
    search_dir: &Path,
    config_file: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<Config, CsvSplitError> {
    let config = match config_file {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_from_dir(search_dir)?,
    };
    let config = config.with_overrides(
        overrides.rows_per_chunk,
        overrides.name_template,
        overrides.separator,
        overrides.extension,
    );

    debug!(
        "Configuration loaded: rows_per_chunk={}, name_template={}, separator={:?}, extension={}",
        config.split.rows_per_chunk,
        config.split.name_template,
        config.split.separator,
        config.discovery.extension
    );

    config.split_options().validate()?;

    Ok(config)
}
