use anyhow::{Context, Result};
use json_array_check::report::{self, Report};
use json_array_check::{StreamValidator, ValidationResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Status lines with glyphs
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Where the file to validate came from.
#[derive(Debug, Clone)]
pub enum Target {
    Explicit(PathBuf),
    Default(PathBuf),
}

impl Target {
    pub fn path(&self) -> &Path {
        match self {
            Target::Explicit(path) | Target::Default(path) => path,
        }
    }
}

/// Run validation for `target` and print the outcome in `format`.
///
/// Returns whether the file is valid. Validation failures are reported, not
/// returned as errors; only rendering problems surface as `Err`.
pub fn validate_command(target: &Target, format: OutputFormat, diagnostics: bool) -> Result<bool> {
    if let Target::Default(path) = target {
        info!(path = %path.display(), "no path given, using default");
        if format == OutputFormat::Text {
            report::announce_default(path);
        }
    }

    let result = match format {
        OutputFormat::Text => json_array_check::validate_json_array(target.path()),
        OutputFormat::Json => {
            let (path, result) = match StreamValidator::resolve(target.path()) {
                Ok(resolved) => {
                    let result = StreamValidator::new().validate(&resolved);
                    (resolved, result)
                }
                Err(err) => (target.path().to_path_buf(), Err(err)),
            };
            print_json(&path, &result)?;
            result
        }
    };

    match result {
        Ok(_) => Ok(true),
        Err(err) => {
            if diagnostics {
                debug!("rendering diagnostic");
                eprintln!("{:?}", miette::Report::new(err));
            }
            Ok(false)
        }
    }
}

fn print_json(path: &Path, result: &ValidationResult) -> Result<()> {
    let report = Report::new(path, result);
    let rendered =
        serde_json::to_string_pretty(&report).context("Failed to serialize validation report")?;
    println!("{rendered}");
    Ok(())
}
