use clap::builder::RangedU64ValueParser;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use csvsplit::commands::{run_split, SplitCommandOptions};
use csvsplit::core::ConfigOverrides;

/// csvsplit - split large CSV files into smaller, more manageable chunks
#[derive(Parser)]
#[command(name = "csvsplit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the files to split
    directory: PathBuf,

    /// Number of data rows per output file
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    lines: Option<usize>,

    /// Output directory (default: <directory>/outs)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output filename pattern using {name} and {num} (default: {name}_{num}.csv)
    #[arg(short, long)]
    pattern: Option<String>,

    /// Field separator used to detect the header row
    #[arg(short, long)]
    separator: Option<char>,

    /// Extension of the files to split
    #[arg(short, long)]
    extension: Option<String>,

    /// Config file (default: ./csvsplit.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let options = SplitCommandOptions {
        output_dir: cli.output,
        config_file: cli.config,
        overrides: ConfigOverrides {
            rows_per_chunk: cli.lines,
            name_template: cli.pattern,
            separator: cli.separator,
            extension: cli.extension,
        },
        json: cli.json,
    };

    if let Err(e) = run_split(&cli.directory, options).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
