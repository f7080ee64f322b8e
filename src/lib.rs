//! ASC Reader Library
//!
//! Reads the plain-text ASC export written by glucose-monitoring devices and
//! serves its readings a page at a time.
//!
//! This library provides tools for:
//! - Parsing ASC files into patient metadata and an ordered list of readings
//! - Dropping malformed data lines without failing the whole load
//! - Paginating records with clamped navigation
//! - Holding a session whose state is replaced all-or-nothing on each load

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod paginator;
pub mod parser;
pub mod session;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod display;
    pub mod interactive;
}

// Re-export commonly used types
pub use config::AscConfig;
pub use error::{AscError, LineError, Result};
pub use models::{ParseOutcome, ParseStats, PatientInfo, Record, RecordSet};
pub use paginator::{PageWindow, Paginator};
pub use parser::{parse_asc, parse_asc_file};
pub use session::{Session, SessionStatus};
