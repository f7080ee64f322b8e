//! Test utilities for ASC parser testing
//!
//! Shared fixtures and helpers used across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod record_parser_tests;

/// Helper to create a complete ASC export with preamble and data section
pub fn create_test_asc() -> String {
    r#"ACCU-CHEK Smart Pix Export
Patient ID: ABC123
Patient Name: Jane Doe
Glucose Limits: Low 70 mg/dl  High 180 mg/dl

YYMMDD HHMM  GLU   INS  CARB  EVT   ST
------------------------------------------
240115 0930 120 4.5 30 EVT1 OK
240115 1245 165 6 45
240116 0700 98
240116 0715
241399 0930 120
240117 2210 143 2 0 EVT2 OK EXTRA
"#
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
