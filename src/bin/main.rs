use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use discover_homebank::{Config, FailurePolicy, InputSource};

/// Converts Discover activity CSV exports into files HomeBank can import.
/// The original files are never modified.
#[derive(Debug, Parser)]
#[command(version, name = "discover-homebank")]
#[command(group = clap::ArgGroup::new("input").required(true).args(["file", "all"]))]
struct Args {
    /// Input file to convert
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Convert every Discover CSV file in --directory (default: current directory)
    #[arg(short, long)]
    all: bool,

    /// Directory searched by --all
    #[arg(short, long, requires = "all")]
    directory: Option<PathBuf>,

    /// Directory the HomeBank files are written to (default: current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Stop at the first file that fails to convert
    #[arg(long)]
    fail_fast: bool,
}

impl Args {
    fn source(&self) -> InputSource {
        match (&self.file, &self.directory) {
            (Some(file), _) => InputSource::File(file.clone()),
            (None, Some(dir)) => InputSource::Directory(dir.clone()),
            (None, None) => InputSource::current_dir(),
        }
    }

    fn policy(&self) -> FailurePolicy {
        if self.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::Continue
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    println!("Converter for making Discover CSV files compatible with HomeBank.");

    let source = args.source();
    if let InputSource::Directory(dir) = &source {
        println!("Running converter on all Discover CSV files in {}", dir.display());
    }

    let config = Config::from_source(&source, args.output_dir.clone(), args.policy())
        .context("failed to resolve input files")?;
    if config.inputs.is_empty() {
        println!("No Discover CSV files found.");
        return Ok(());
    }

    let report = discover_homebank::run(&config);

    for (input, output) in &report.converted {
        println!("Converted {} -> {}", input.display(), output.display());
    }
    for (input, err) in &report.failures {
        println!("Failed {}: {err}", input.display());
    }
    for input in &report.skipped {
        println!("Skipped {}", input.display());
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} file(s) failed to convert",
            report.failures.len(),
            config.inputs.len()
        );
    }

    Ok(())
}
