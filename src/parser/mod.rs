//! Parser for glucose-monitor ASC export files
//!
//! An ASC file is a free-text preamble carrying patient metadata, followed by
//! a data section of whitespace-separated readings. The parser makes a single
//! forward pass and never backtracks.
//!
//! ## Architecture
//!
//! - [`parser`] - Stream and file handling, per-load state
//! - [`header`] - Classification of each line into preamble, marker, or data
//! - [`record_parser`] - Extraction of a [`Record`](crate::models::Record) from one data line
//!
//! ## Usage
//!
//! ```rust
//! use asc_reader::parser::parse_asc;
//!
//! let input = "Patient ID: ABC123\nData:\n240115 0930 120 4.5\n";
//! let outcome = parse_asc(input.as_bytes()).unwrap();
//!
//! assert_eq!(outcome.patient.id, "ABC123");
//! assert_eq!(outcome.records[0].date, "15/01/2024");
//! assert_eq!(outcome.records[0].carbs, "N/A");
//! ```

pub mod header;
pub mod parser;
pub mod record_parser;

#[cfg(test)]
mod tests;

pub use header::{LineKind, classify_line};
pub use parser::{parse_asc, parse_asc_file};
pub use record_parser::{format_date, format_time, parse_data_line};
