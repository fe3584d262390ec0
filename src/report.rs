//! Human-readable and JSON rendering of validation outcomes

use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::FailureKind;
use crate::validation::ValidationResult;

const INFO: &str = "ℹ️";
const PROBE: &str = "🔍";
const SUCCESS: &str = "✅";
const FAILURE: &str = "❌";

pub fn announce_default(path: &Path) {
    println!("{INFO} {}", format!("No path given, using default: {}", path.display()).cyan());
}

pub fn announce_target(path: &Path) {
    println!("{PROBE} Validating file: {}", path.display());
}

/// Status line text for an outcome, without glyph or colour.
pub fn outcome_message(result: &ValidationResult) -> String {
    match result {
        Ok(validated) => format!(
            "Valid JSON array. {} objects read successfully.",
            validated.item_count
        ),
        Err(err) => err.to_string(),
    }
}

pub fn print_outcome(result: &ValidationResult) {
    let message = outcome_message(result);
    match result {
        Ok(_) => println!("{SUCCESS} {}", message.green()),
        Err(_) => println!("{FAILURE} {}", message.red()),
    }
}

/// Machine-readable form of an outcome.
#[derive(Debug, Serialize)]
pub struct Report {
    pub path: PathBuf,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Report {
    pub fn new(path: &Path, result: &ValidationResult) -> Self {
        match result {
            Ok(validated) => Self {
                path: validated.path.clone(),
                valid: true,
                item_count: Some(validated.item_count),
                kind: None,
                index: None,
                detail: None,
            },
            Err(err) => Self {
                path: path.to_path_buf(),
                valid: false,
                item_count: None,
                kind: Some(err.kind()),
                index: err.index(),
                detail: Some(err.to_string()),
            },
        }
    }
}
