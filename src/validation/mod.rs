mod boundary;
mod stream;
mod validator;


pub use validator::{StreamValidator, ValidatedArray, ValidationResult};
