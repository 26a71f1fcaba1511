//! Configuration error type.
//!
//! Sub-crates define their own error enums and wrap `VtsError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `vts-core`: everything that can go wrong while
/// describing a building.
#[derive(Debug, Error, PartialEq)]
pub enum VtsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown parameter `{0}`")]
    UnknownParam(String),

    #[error("parameter `{name}` expects a {expected} value")]
    ParamKind {
        name:     &'static str,
        expected: &'static str,
    },

    #[error("parameter `{name}` = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name:  &'static str,
        value: f64,
        min:   f64,
        max:   f64,
    },
}

/// Shorthand result type for configuration handling.
pub type VtsResult<T> = Result<T, VtsError>;
