//! Error types for navrail-core

use thiserror::Error;

/// Core error type for navrail operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unrecognized color scheme '{value}' (expected \"dark\" or \"light\")")]
    UnknownScheme { value: String },

    #[error("No user configuration directory available on this platform")]
    ConfigDirUnavailable,
}
