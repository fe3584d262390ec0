//! Pre-ingestion check that a JSON file is an array of objects.
//!
//! The file is never loaded whole: the first and last significant bytes are
//! inspected directly, then the array is streamed element by element.

pub mod defaults;
pub mod error;
pub mod report;
pub mod validation;

pub use error::{FailureKind, ItemKind, ParseFailure, ValidationError};
pub use validation::{StreamValidator, ValidatedArray, ValidationResult};

use std::path::Path;

/// Validate `path`, printing the resolved path and the outcome to stdout.
pub fn validate_json_array(path: impl AsRef<Path>) -> ValidationResult {
    let raw = path.as_ref();
    let path = match StreamValidator::resolve(raw) {
        Ok(path) => path,
        Err(err) => {
            report::announce_target(raw);
            let result = Err(err);
            report::print_outcome(&result);
            return result;
        }
    };

    report::announce_target(&path);
    let result = StreamValidator::new().validate(&path);
    report::print_outcome(&result);
    result
}
