//! Line classification for ASC files
//!
//! Rules are checked in a fixed priority order and the first match wins, so a
//! "Patient ID:" line that also mentions "Data:" is still a patient ID line.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{
    DATA_LINE_PATTERN, DATA_SECTION_MARKERS, GLUCOSE_LIMITS_MARKER, PATIENT_ID_PREFIX,
    PATIENT_NAME_PREFIX,
};

static DATA_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATA_LINE_PATTERN).expect("data line pattern is valid"));

/// What a single trimmed, non-blank line means to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Value after the "Patient ID:" prefix, trimmed
    PatientId(&'a str),
    /// Value after the "Patient Name:" prefix, trimmed
    PatientName(&'a str),
    /// The whole line
    GlucoseLimits(&'a str),
    /// Opens the data section
    DataMarker,
    /// Candidate reading line inside the data section
    Data,
    /// Anything else; ignored
    Other,
}

/// Classify a trimmed line given whether the data section has started
pub fn classify_line(line: &str, in_data_section: bool) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix(PATIENT_ID_PREFIX) {
        return LineKind::PatientId(rest.trim());
    }

    if let Some(rest) = line.strip_prefix(PATIENT_NAME_PREFIX) {
        return LineKind::PatientName(rest.trim());
    }

    if line.contains(GLUCOSE_LIMITS_MARKER) {
        return LineKind::GlucoseLimits(line);
    }

    if DATA_SECTION_MARKERS
        .iter()
        .any(|marker| line.contains(marker))
    {
        return LineKind::DataMarker;
    }

    if in_data_section && is_data_line(line) {
        return LineKind::Data;
    }

    LineKind::Other
}

/// Six digits, whitespace, four digits at the start of the line
pub fn is_data_line(line: &str) -> bool {
    DATA_LINE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_prefixes() {
        assert_eq!(
            classify_line("Patient ID: ABC123", false),
            LineKind::PatientId("ABC123")
        );
        assert_eq!(
            classify_line("Patient Name:   Jane Doe  ", true),
            LineKind::PatientName("Jane Doe")
        );
        assert_eq!(classify_line("Patient ID:", false), LineKind::PatientId(""));
    }

    #[test]
    fn test_glucose_limits_keeps_whole_line() {
        let line = "Target Glucose Limits: 70 - 180 mg/dl";
        assert_eq!(classify_line(line, false), LineKind::GlucoseLimits(line));
    }

    #[test]
    fn test_priority_order() {
        // Prefix rules win over the data marker
        assert_eq!(
            classify_line("Patient ID: Data: 7", false),
            LineKind::PatientId("Data: 7")
        );
        assert_eq!(
            classify_line("Glucose Limits YYMMDD HHMM", false),
            LineKind::GlucoseLimits("Glucose Limits YYMMDD HHMM")
        );
    }

    #[test]
    fn test_data_markers() {
        assert_eq!(
            classify_line("YYMMDD HHMM GLU INS CARB EVT ST", false),
            LineKind::DataMarker
        );
        assert_eq!(classify_line("Data:", false), LineKind::DataMarker);
        assert_eq!(classify_line("Raw Data: follows", true), LineKind::DataMarker);
    }

    #[test]
    fn test_data_lines_need_data_section() {
        assert_eq!(classify_line("240115 0930 120", false), LineKind::Other);
        assert_eq!(classify_line("240115 0930 120", true), LineKind::Data);
        assert_eq!(classify_line("240115\t0930", true), LineKind::Data);
    }

    #[test]
    fn test_data_line_pattern() {
        assert!(is_data_line("240115 0930"));
        assert!(is_data_line("240115    093012 extra"));
        assert!(!is_data_line("2401150 0930"));
        assert!(!is_data_line("24011 0930"));
        assert!(!is_data_line("240115 093"));
        assert!(!is_data_line("240115-0930"));
        assert!(!is_data_line("----------"));
    }
}
