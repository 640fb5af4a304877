mod error;
mod report;

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::error::{exit_code_for, report_error};
use dialbook_config as config;
use dialbook_config::OutputFormat;
use dialbook_core::{load_records, InputFormat};

#[derive(Debug, Parser)]
#[command(name = "dialbook", version, about = "Sort and print valid phone numbers")]
struct Cli {
    /// File of names and numbers
    file: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Input format (overrides `input_format` from the config file)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Tsv,
    Json,
}

impl From<FormatArg> for InputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Tsv => InputFormat::Tsv,
            FormatArg::Json => InputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        file,
        config: config_path,
        format,
        json,
        verbose: _,
    } = cli;

    let app_config = config::load(config_path).with_context(|| "load config")?;

    let format = format.map(InputFormat::from).unwrap_or(app_config.input_format);
    let json = json || app_config.output_format == OutputFormat::Json;
    debug!(path = %file.display(), ?format, "loading records");

    let records = load_records(&file, format)
        .with_context(|| format!("read input file {}", file.display()))?;
    debug!(count = records.len(), "records loaded");

    if json {
        report::print_json_report(&records)
    } else {
        report::print_text_report(&records)
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
