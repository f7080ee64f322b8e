//! Format markers and display constants for ASC files.
//!
//! The device export has no formal schema, so these literal phrases are the
//! whole structural contract of the preamble.

// =============================================================================
// Preamble Markers
// =============================================================================

/// Prefix of the line carrying the patient identifier
pub const PATIENT_ID_PREFIX: &str = "Patient ID:";

/// Prefix of the line carrying the patient name
pub const PATIENT_NAME_PREFIX: &str = "Patient Name:";

/// Substring identifying the glucose limits line (stored whole)
pub const GLUCOSE_LIMITS_MARKER: &str = "Glucose Limits";

/// Markers that open the data section
pub const DATA_SECTION_MARKERS: &[&str] = &["YYMMDD HHMM", "Data:"];

// =============================================================================
// Data Lines
// =============================================================================

/// Six-digit date, whitespace, four-digit time, anything
pub const DATA_LINE_PATTERN: &str = r"^[0-9]{6}\s+[0-9]{4}";

/// Date format of the first token on a data line
pub const INPUT_DATE_FORMAT: &str = "%y%m%d";

/// Date format shown to users
pub const OUTPUT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Minimum tokens for a data line to yield a record (date, time, glucose)
pub const MIN_DATA_TOKENS: usize = 3;

/// Placeholder for readings missing from the end of a data line
pub const MISSING_FIELD: &str = "N/A";

// =============================================================================
// Display
// =============================================================================

/// Table columns in display order
pub const COLUMN_HEADERS: [&str; 7] = [
    "Date",
    "Time",
    "Glucose (mg/dl)",
    "Insulin (U)",
    "Carbohydrates (g)",
    "Event Code",
    "Status",
];

/// Banner shown before any load and after a clear
pub const NO_FILE_LOADED: &str = "No file loaded";

/// Banner shown when a loaded file had no patient metadata
pub const PATIENT_INFO_UNAVAILABLE: &str = "Patient information not available";

// =============================================================================
// Configuration
// =============================================================================

/// Records per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Environment variable overriding the page size
pub const PAGE_SIZE_ENV_VAR: &str = "ASC_READER_PAGE_SIZE";

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "asc-reader";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";
