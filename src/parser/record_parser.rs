//! Individual data line parsing for ASC files
//!
//! A data line is `YYMMDD HHMM [glucose] [insulin] [carbs] [event] [status]`.
//! Only the date is validated; every reading is passed through as the device
//! wrote it.

use chrono::NaiveDate;

use crate::constants::{INPUT_DATE_FORMAT, MIN_DATA_TOKENS, MISSING_FIELD, OUTPUT_DATE_FORMAT};
use crate::error::LineError;
use crate::models::Record;

/// Parse one data line into a record
///
/// Fails when there are fewer than three fields or the date token is not a
/// real calendar date. Fields past the seventh are ignored.
pub fn parse_data_line(line: &str) -> Result<Record, LineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_DATA_TOKENS {
        return Err(LineError::TooFewTokens {
            found: tokens.len(),
        });
    }

    let date = format_date(tokens[0])?;
    let time = format_time(tokens[1]);

    let field = |index: usize| -> String {
        tokens
            .get(index)
            .map_or_else(|| MISSING_FIELD.to_string(), |token| token.to_string())
    };

    Ok(Record {
        date,
        time,
        glucose: field(2),
        insulin: field(3),
        carbs: field(4),
        event_code: field(5),
        status: field(6),
    })
}

/// Reformat a `YYMMDD` token as `DD/MM/YYYY`
pub fn format_date(token: &str) -> Result<String, LineError> {
    NaiveDate::parse_from_str(token, INPUT_DATE_FORMAT)
        .map(|date| date.format(OUTPUT_DATE_FORMAT).to_string())
        .map_err(|_| LineError::InvalidDate {
            token: token.to_string(),
        })
}

/// Reformat an `HHMM` token as `HH:MM`
///
/// Pure slicing: "2599" becomes "25:99". Tokens too short to slice are
/// returned unchanged.
pub fn format_time(token: &str) -> String {
    match (token.get(0..2), token.get(2..4)) {
        (Some(hours), Some(minutes)) => format!("{}:{}", hours, minutes),
        _ => token.to_string(),
    }
}
