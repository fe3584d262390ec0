use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::boundary::{self, CLOSING_BRACKET, OPENING_BRACKET};
use super::stream;
use crate::error::ValidationError;

/// A file that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedArray {
    pub path: PathBuf,
    pub item_count: usize,
}

pub type ValidationResult = Result<ValidatedArray, ValidationError>;

/// Checks that a file holds a JSON array whose top-level elements are all objects.
///
/// The file is opened twice: once for the first/last byte checks and once for
/// the streaming parse. Both handles are dropped before `validate` returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct StreamValidator;

impl StreamValidator {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a possibly relative path against the current directory.
    pub fn resolve(path: &Path) -> Result<PathBuf, ValidationError> {
        Ok(std::path::absolute(path)?)
    }

    pub fn validate(&self, path: impl AsRef<Path>) -> ValidationResult {
        let path = Self::resolve(path.as_ref())?;
        debug!(path = %path.display(), "validating JSON array");

        let result = self.validate_resolved(&path);
        match &result {
            Ok(validated) => info!(items = validated.item_count, "file is a valid array of objects"),
            Err(err) => info!(kind = %err.kind(), "validation failed: {err}"),
        }
        result
    }

    fn validate_resolved(&self, path: &Path) -> ValidationResult {
        if !path.exists() {
            return Err(ValidationError::NotFound {
                path: path.to_path_buf(),
            });
        }

        self.check_boundaries(path)?;

        debug!("boundaries ok, streaming items");
        let reader = BufReader::new(File::open(path)?);
        let item_count = stream::scan_array(reader)?;

        Ok(ValidatedArray {
            path: path.to_path_buf(),
            item_count,
        })
    }

    fn check_boundaries(&self, path: &Path) -> Result<(), ValidationError> {
        let mut file = File::open(path)?;

        let first = boundary::first_byte(&mut file)?;
        debug!(?first, "first byte");
        if first != Some(OPENING_BRACKET) {
            return Err(ValidationError::MissingOpeningBracket);
        }

        let last = boundary::last_significant_byte(&mut file)?;
        debug!(?last, "last significant byte");
        if last != Some(CLOSING_BRACKET) {
            return Err(ValidationError::MissingClosingBracket);
        }

        Ok(())
    }
}
