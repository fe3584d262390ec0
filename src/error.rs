//! Failure taxonomy for array validation

use miette::Diagnostic;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The coarse category of a failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    NotFound,
    MalformedBoundary,
    InvalidItem,
    ParseError,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::NotFound => "not_found",
            FailureKind::MalformedBoundary => "malformed_boundary",
            FailureKind::InvalidItem => "invalid_item",
            FailureKind::ParseError => "parse_error",
        };
        f.write_str(name)
    }
}

/// JSON kind of a top-level array element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemKind::Null => "null",
            ItemKind::Boolean => "a boolean",
            ItemKind::Number => "a number",
            ItemKind::String => "a string",
            ItemKind::Array => "an array",
            ItemKind::Object => "an object",
        };
        f.write_str(name)
    }
}

/// Low-level failure raised while opening, seeking or parsing the file.
#[derive(Error, Debug)]
pub enum ParseFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum ValidationError {
    #[error("file does not exist: {}", path.display())]
    #[diagnostic(
        code(json_array_check::not_found),
        help("Check the path, or omit it to validate the default data file")
    )]
    NotFound { path: PathBuf },

    #[error("file does not start with '[' (not a JSON array)")]
    #[diagnostic(
        code(json_array_check::malformed_boundary),
        help("The very first byte must be '['; leading whitespace or a byte order mark is not accepted")
    )]
    MissingOpeningBracket,

    #[error("file does not end with ']' (unterminated JSON array)")]
    #[diagnostic(
        code(json_array_check::malformed_boundary),
        help("Only spaces, tabs and newlines may follow the closing ']'")
    )]
    MissingClosingBracket,

    #[error("element at index {index} is not a JSON object (found {kind})")]
    #[diagnostic(
        code(json_array_check::invalid_item),
        help("Every top-level element of the array must be a key-value record")
    )]
    InvalidItem { index: usize, kind: ItemKind },

    #[error("error while reading or parsing: {0}")]
    #[diagnostic(code(json_array_check::parse_error))]
    Parse(#[from] ParseFailure),
}

impl ValidationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ValidationError::NotFound { .. } => FailureKind::NotFound,
            ValidationError::MissingOpeningBracket | ValidationError::MissingClosingBracket => {
                FailureKind::MalformedBoundary
            }
            ValidationError::InvalidItem { .. } => FailureKind::InvalidItem,
            ValidationError::Parse(_) => FailureKind::ParseError,
        }
    }

    /// Zero-based index of the offending element, for `InvalidItem` failures.
    pub fn index(&self) -> Option<usize> {
        match self {
            ValidationError::InvalidItem { index, .. } => Some(*index),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ValidationError {
    fn from(err: std::io::Error) -> Self {
        ValidationError::Parse(ParseFailure::Io(err))
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::Parse(ParseFailure::Json(err))
    }
}
