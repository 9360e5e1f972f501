//! Errors that can be raised when parsing or resolving configuration.

use std::path::PathBuf;

use crate::environment;

/// The errors that can be raised when parsing the on-disk configuration.
#[derive(Debug, thiserror::Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}, line {line}, column {column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("I/O error: {0}")]
    IoErrorButStringified(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// The errors that can be raised when turning a parsed configuration into a
/// runtime one.
#[derive(Debug, thiserror::Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("missing environment variable when processing {file_path}: {message}")]
    MissingEnvironmentVariable { file_path: PathBuf, message: String },
}

impl From<environment::Error> for MakeRuntimeConfigurationError {
    fn from(value: environment::Error) -> Self {
        Self::MissingEnvironmentVariable {
            file_path: PathBuf::from(crate::version1::CONFIGURATION_FILENAME),
            message: value.to_string(),
        }
    }
}

/// The errors that can be raised when writing the parsed configuration back
/// to disk.
#[derive(Debug, thiserror::Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
