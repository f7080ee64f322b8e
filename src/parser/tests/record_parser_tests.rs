//! Tests for single data line extraction

use crate::error::LineError;
use crate::parser::{format_date, format_time, parse_data_line};

#[test]
fn test_full_line() {
    let record = parse_data_line("240115 0930 120 4.5 30 EVT1 OK").unwrap();

    assert_eq!(record.date, "15/01/2024");
    assert_eq!(record.time, "09:30");
    assert_eq!(record.glucose, "120");
    assert_eq!(record.insulin, "4.5");
    assert_eq!(record.carbs, "30");
    assert_eq!(record.event_code, "EVT1");
    assert_eq!(record.status, "OK");
}

#[test]
fn test_missing_trailing_fields_use_sentinel() {
    let record = parse_data_line("240115 0930 120").unwrap();

    assert_eq!(record.glucose, "120");
    assert_eq!(record.insulin, "N/A");
    assert_eq!(record.carbs, "N/A");
    assert_eq!(record.event_code, "N/A");
    assert_eq!(record.status, "N/A");
}

#[test]
fn test_extra_fields_ignored() {
    let record = parse_data_line("240115 0930 1 2 3 4 5 6 7").unwrap();
    assert_eq!(record.status, "5");
}

#[test]
fn test_too_few_tokens() {
    assert_eq!(
        parse_data_line("240115 0930"),
        Err(LineError::TooFewTokens { found: 2 })
    );
    assert_eq!(
        parse_data_line("   "),
        Err(LineError::TooFewTokens { found: 0 })
    );
}

#[test]
fn test_invalid_date_dropped() {
    assert_eq!(
        parse_data_line("241399 0930 120"),
        Err(LineError::InvalidDate {
            token: "241399".to_string()
        })
    );
    assert!(parse_data_line("240230 0930 120").is_err());
    assert!(parse_data_line("000000 0930 120").is_err());
}

#[test]
fn test_tokens_are_not_validated() {
    let record = parse_data_line("240115 0930 HI -- ??? x y").unwrap();
    assert_eq!(record.glucose, "HI");
    assert_eq!(record.insulin, "--");
    assert_eq!(record.carbs, "???");
}

#[test]
fn test_format_date() {
    assert_eq!(format_date("240115").unwrap(), "15/01/2024");
    assert_eq!(format_date("991231").unwrap(), "31/12/1999");
    assert_eq!(format_date("240229").unwrap(), "29/02/2024");
    // 00-69 is 20xx, 70-99 is 19xx
    assert_eq!(format_date("691231").unwrap(), "31/12/2069");
    assert_eq!(format_date("700101").unwrap(), "01/01/1970");
    assert!(format_date("230229").is_err());
}

#[test]
fn test_format_time_is_plain_slicing() {
    assert_eq!(format_time("0930"), "09:30");
    assert_eq!(format_time("2599"), "25:99");
    assert_eq!(format_time("093015"), "09:30");
    assert_eq!(format_time("93"), "93");
}

#[test]
fn test_tab_separated_line() {
    let record = parse_data_line("240115\t0930\t\t120\t4").unwrap();
    assert_eq!(record.glucose, "120");
    assert_eq!(record.insulin, "4");
    assert_eq!(record.carbs, "N/A");
}
