//! Command-line argument definitions for the ASC reader
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::{AscError, Result};

/// CLI arguments for the ASC reader
///
/// Reads a glucose-monitor ASC export and prints its patient details and
/// readings as a paginated table.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "asc-reader",
    version,
    about = "Read glucose-monitor ASC export files as paginated tables",
    long_about = "Reads the plain-text ASC export written by glucose-monitoring devices, \
                  extracts the patient details from the preamble and the timestamped \
                  glucose, insulin and carbohydrate readings from the data section, and \
                  shows them a page at a time. Use --interactive to page through a file \
                  and load or clear files from a prompt."
)]
pub struct Args {
    /// ASC file to read
    ///
    /// Required unless --interactive is given, in which case a file can be
    /// opened from the prompt instead.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Page to display (1-based, clamped to the last page)
    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        default_value_t = 1,
        help = "Page number to display"
    )]
    pub page: usize,

    /// Records per page, overriding the config file and environment
    #[arg(long = "page-size", value_name = "N", help = "Records per page")]
    pub page_size: Option<usize>,

    /// Print every page in sequence instead of a single page
    #[arg(long = "all", conflicts_with = "page", help = "Print every page")]
    pub all: bool,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Human,
        help = "Output format"
    )]
    pub output_format: OutputFormat,

    /// Page through the file with commands read from stdin
    #[arg(
        short = 'i',
        long = "interactive",
        conflicts_with = "all",
        help = "Navigate pages interactively"
    )]
    pub interactive: bool,

    /// Configuration file path
    ///
    /// If not specified, looks for <config dir>/asc-reader/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Configuration file path"
    )]
    pub config_file: Option<PathBuf>,

    /// Print parse statistics after the table
    #[arg(long = "stats", help = "Show parse statistics")]
    pub stats: bool,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only log errors
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Only log errors"
    )]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured terminal table
    Human,
    /// JSON for scripting
    Json,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.file.is_none() && !self.interactive {
            return Err(AscError::configuration(
                "An ASC file is required unless --interactive is used",
            ));
        }

        if self.page == 0 {
            return Err(AscError::configuration("Page numbers start at 1"));
        }

        if self.page_size == Some(0) {
            return Err(AscError::configuration("Page size must be greater than 0"));
        }

        if self.interactive && self.output_format == OutputFormat::Json {
            return Err(AscError::configuration(
                "JSON output is not available in interactive mode",
            ));
        }

        Ok(())
    }

    /// Get the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
