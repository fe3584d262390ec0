mod validate;

pub use validate::{OutputFormat, Target, validate_command};
