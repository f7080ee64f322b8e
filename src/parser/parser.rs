//! Core ASC parser implementation
//!
//! Handles file and stream reading and carries the state of one parse:
//! the data-section flag, the patient fields seen so far, and the records.
//! Nothing outlives a call; the accumulated values are returned whole.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::header::{LineKind, classify_line};
use super::record_parser::parse_data_line;
use crate::error::{AscError, Result};
use crate::models::{ParseOutcome, ParseStats, PatientInfo, RecordSet};

/// Label used in errors when parsing a stream with no backing file
const STREAM_LABEL: &str = "<stream>";

/// Parse an ASC file from disk
///
/// The file handle lives only for the duration of this call.
pub fn parse_asc_file(path: &Path) -> Result<ParseOutcome> {
    info!("Parsing ASC file: {}", path.display());

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AscError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => AscError::io(path, e),
    })?;

    parse_lines(BufReader::new(file), path)
}

/// Parse ASC content from any buffered reader
pub fn parse_asc<R: BufRead>(reader: R) -> Result<ParseOutcome> {
    parse_lines(reader, Path::new(STREAM_LABEL))
}

/// Lines are decoded lossily: exports written in a legacy code page still
/// load, with undecodable bytes replaced by U+FFFD.
fn parse_lines<R: BufRead>(mut reader: R, origin: &Path) -> Result<ParseOutcome> {
    let mut state = ParseState::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| AscError::io(PathBuf::from(origin), e))?;
        if read == 0 {
            break;
        }

        line_number += 1;
        let line = String::from_utf8_lossy(&buf);
        state.process_line(line_number, &line);
    }

    let outcome = state.finish();
    info!(
        "Parsed {} records from {} data lines ({} skipped)",
        outcome.stats.records_parsed, outcome.stats.data_lines, outcome.stats.lines_skipped
    );

    Ok(outcome)
}

/// Accumulated state for one forward pass
struct ParseState {
    in_data_section: bool,
    patient: PatientInfo,
    records: RecordSet,
    stats: ParseStats,
}

impl ParseState {
    fn new() -> Self {
        Self {
            in_data_section: false,
            patient: PatientInfo::default(),
            records: RecordSet::new(),
            stats: ParseStats::new(),
        }
    }

    fn process_line(&mut self, line_number: usize, raw: &str) {
        self.stats.lines_read += 1;

        let line = raw.trim();
        if line.is_empty() {
            self.stats.blank_lines += 1;
            return;
        }

        match classify_line(line, self.in_data_section) {
            LineKind::PatientId(id) => {
                debug!("Patient ID on line {}: {}", line_number, id);
                self.patient.id = id.to_string();
            }
            LineKind::PatientName(name) => {
                debug!("Patient name on line {}", line_number);
                self.patient.name = name.to_string();
            }
            LineKind::GlucoseLimits(limits) => {
                self.patient.glucose_limits = limits.to_string();
            }
            LineKind::DataMarker => {
                if !self.in_data_section {
                    debug!("Data section starts after line {}", line_number);
                }
                self.in_data_section = true;
            }
            LineKind::Data => {
                self.stats.data_lines += 1;
                match parse_data_line(line) {
                    Ok(record) => {
                        self.stats.records_parsed += 1;
                        self.records.push(record);
                    }
                    Err(reason) => {
                        warn!("Skipping line {}: {}", line_number, reason);
                        self.stats.record_skip(line_number, reason);
                    }
                }
            }
            LineKind::Other => {}
        }
    }

    fn finish(self) -> ParseOutcome {
        ParseOutcome {
            patient: self.patient,
            records: self.records,
            stats: self.stats,
        }
    }
}
