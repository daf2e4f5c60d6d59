//! Robot crate error conveniences
//!
//! Re-exports tabletop-error and provides protocol-specific constructors.

pub use tabletop_error::{Error, ErrorKind, Result};

/// Create a ConfigInvalid error for a non-positive table dimension
pub fn invalid_dimension(name: &'static str, value: i32) -> Error {
    Error::config_invalid(format!("table {} must be positive, got {}", name, value))
        .with_operation("table::new")
        .with_context(name, value.to_string())
}

/// Create an InvalidArgument error for a PLACE without arguments
pub fn missing_place_args() -> Error {
    Error::invalid_argument("PLACE expects X,Y,F").with_operation("command::parse")
}

/// Create an InvalidArgument error for a PLACE with the wrong field count
pub fn place_field_count(found: usize) -> Error {
    Error::invalid_argument(format!("PLACE expects 3 fields, got {}", found))
        .with_operation("command::parse")
        .with_context("fields", found.to_string())
}

/// Create a ParseFailed error for a coordinate that is not an integer
pub fn coordinate_not_integer(field: &'static str, token: impl Into<String>) -> Error {
    let token = token.into();
    Error::parse_failed(format!("{} coordinate '{}' is not an integer", field, token))
        .with_operation("command::parse")
        .with_context("field", field)
        .with_context("token", token)
}

/// Create an InvalidArgument error for trailing text after a bare keyword
pub fn unexpected_args(keyword: &'static str, args: impl Into<String>) -> Error {
    Error::invalid_argument(format!("{} takes no arguments", keyword))
        .with_operation("command::parse")
        .with_context("args", args)
}
