//! Core data structures for ASC processing.
//!
//! Defines patient metadata, reading records, and the parse statistics
//! returned alongside them.

use crate::constants::{COLUMN_HEADERS, MISSING_FIELD};
use crate::error::LineError;
use serde::{Deserialize, Serialize};

/// Patient metadata from the file preamble
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub id: String,
    pub name: String,
    /// The full raw line containing "Glucose Limits"
    pub glucose_limits: String,
}

impl PatientInfo {
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.name.is_empty() && self.glucose_limits.is_empty()
    }

    /// One-line banner, omitting fields that were not present in the file
    ///
    /// `None` when there is nothing to show.
    pub fn summary(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut parts = Vec::with_capacity(3);
        if !self.id.is_empty() {
            parts.push(format!("ID: {}", self.id));
        }
        if !self.name.is_empty() {
            parts.push(format!("Name: {}", self.name));
        }
        if !self.glucose_limits.is_empty() {
            parts.push(self.glucose_limits.clone());
        }
        Some(parts.join(" | "))
    }
}

/// A single timestamped reading
///
/// Everything after date and time is an opaque device token, or
/// [`MISSING_FIELD`] when the line ended early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// `DD/MM/YYYY`
    pub date: String,
    /// `HH:MM`, not range checked
    pub time: String,
    pub glucose: String,
    pub insulin: String,
    pub carbs: String,
    pub event_code: String,
    pub status: String,
}

impl Record {
    /// Display strings in [`COLUMN_HEADERS`] order
    pub fn columns(&self) -> [&str; COLUMN_HEADERS.len()] {
        [
            &self.date,
            &self.time,
            &self.glucose,
            &self.insulin,
            &self.carbs,
            &self.event_code,
            &self.status,
        ]
    }

    /// Whether a reading column was absent from the source line
    pub fn is_missing(value: &str) -> bool {
        value == MISSING_FIELD
    }
}

/// Ordered readings, in file order
pub type RecordSet = Vec<Record>;

/// A data line that was dropped, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the source
    pub line_number: usize,
    #[serde(serialize_with = "serialize_reason")]
    pub reason: LineError,
}

fn serialize_reason<S: serde::Serializer>(
    reason: &LineError,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

/// Parsing statistics for one load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Every line read from the stream
    pub lines_read: usize,
    pub blank_lines: usize,
    /// Lines inside the data section that matched the date/time pattern
    pub data_lines: usize,
    pub records_parsed: usize,
    pub lines_skipped: usize,
    pub skipped: Vec<SkippedLine>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_skip(&mut self, line_number: usize, reason: LineError) {
        self.lines_skipped += 1;
        self.skipped.push(SkippedLine {
            line_number,
            reason,
        });
    }

    /// Share of data lines that produced a record, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.data_lines == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.data_lines as f64) * 100.0
        }
    }
}

/// Everything a single parse produces
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub patient: PatientInfo,
    pub records: RecordSet,
    pub stats: ParseStats,
}
