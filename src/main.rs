use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tidy_jobs::data::{loader, summary, writer};
use tidy_jobs::{CleaningConfig, Pipeline};

/// Clean a job-listing dataset into feature-ready columns.
#[derive(Debug, Parser)]
#[command(name = "tidy-jobs", version, about)]
struct Cli {
    /// Raw dataset (.csv, .json or .parquet)
    input: PathBuf,

    /// Where to write the cleaned table; format follows the extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON cleaning config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also group `Location` into metro areas
    #[arg(long)]
    with_location: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CleaningConfig::from_path(path)?,
        None => CleaningConfig::default(),
    };
    config.include_location |= cli.with_location;

    let raw = loader::load_file(&cli.input)
        .with_context(|| format!("loading {}", cli.input.display()))?;
    let cleaned = Pipeline::with_config(&config)
        .run(&raw)
        .context("cleaning dataset")?;

    for column in summary::describe(&cleaned) {
        info!("{column}");
    }

    match &cli.output {
        Some(path) => writer::save_file(&cleaned, path)?,
        None => writer::write_csv(&cleaned, std::io::stdout().lock())?,
    }
    Ok(())
}
