use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use json_array_check::defaults;

mod commands;

use commands::{OutputFormat, Target};

#[derive(Parser)]
#[command(
    name = "json-array-check",
    about = "Checks that a JSON file is an array of objects without loading it into memory",
    version,
    long_about = None
)]
struct Cli {
    /// JSON file to validate (defaults to ../data/stoptimes.json next to the executable)
    path: Option<PathBuf>,

    /// Additional arguments are accepted and ignored
    #[arg(hide = true)]
    ignored: Vec<OsString>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit with status 1 when validation fails
    #[arg(long)]
    strict: bool,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if !cli.ignored.is_empty() {
        debug!(count = cli.ignored.len(), "ignoring extra arguments");
    }

    let target = match cli.path {
        Some(path) => Target::Explicit(path),
        None => Target::Default(defaults::default_target(&defaults::executable_dir()?)),
    };

    let valid = commands::validate_command(&target, cli.format, cli.verbose > 0)?;

    if cli.strict && !valid {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("json_array_check=warn"),
        1 => EnvFilter::new("json_array_check=info"),
        _ => EnvFilter::new("json_array_check=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
