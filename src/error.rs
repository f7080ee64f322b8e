//! Error handling for ASC file loading.
//!
//! Fatal errors abort a whole load and are surfaced to the caller as
//! [`AscError`]. Problems with individual data lines are [`LineError`]s,
//! which the parser records in its statistics and never propagates.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AscError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl AscError {
    /// Create an I/O error tied to the path being read
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Reason a data line was dropped without producing a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected at least 3 fields, found {found}")]
    TooFewTokens { found: usize },

    #[error("invalid YYMMDD date '{token}'")]
    InvalidDate { token: String },
}

pub type Result<T> = std::result::Result<T, AscError>;
