//! Terminal and JSON rendering of sessions and pages.
//!
//! Renderers return strings so commands decide where output goes.

use colored::*;
use serde_json::json;

use crate::constants::COLUMN_HEADERS;
use crate::models::{ParseStats, Record};
use crate::paginator::PageWindow;
use crate::session::Session;

/// Patient banner as shown above the table
pub fn render_patient(session: &Session) -> String {
    format!(
        "{} {}",
        "Patient:".bright_cyan().bold(),
        session.patient_summary().bright_white()
    )
}

/// Fixed-width table of one page of records
pub fn render_table(records: &[Record]) -> String {
    let mut widths: Vec<usize> = COLUMN_HEADERS.iter().map(|h| h.len()).collect();
    for record in records {
        for (width, value) in widths.iter_mut().zip(record.columns()) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut out = String::new();

    let header: Vec<String> = COLUMN_HEADERS
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<w$}", h).bright_cyan().bold().to_string())
        .collect();
    out.push_str(&header.join("  "));
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&rule.join("  ").bright_black().to_string());
    out.push('\n');

    for record in records {
        let cells: Vec<String> = record
            .columns()
            .iter()
            .zip(&widths)
            .map(|(value, &w)| {
                let cell = format!("{:<w$}", value);
                if Record::is_missing(value) {
                    cell.bright_black().to_string()
                } else {
                    cell
                }
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    out
}

pub fn render_page_footer(window: &PageWindow<'_>) -> String {
    window.label().bright_yellow().to_string()
}

/// Banner, table and footer for the session's current page
pub fn render_session(session: &Session) -> String {
    let window = session.paginator().current_page();
    let mut out = String::new();

    out.push_str(&render_patient(session));
    out.push_str("\n\n");
    if !window.is_empty() {
        out.push_str(&render_table(window.records));
        out.push('\n');
    }
    out.push_str(&render_page_footer(&window));
    out.push('\n');

    out
}

pub fn render_stats(stats: &ParseStats) -> String {
    let mut out = format!("\n{}\n", "Parse Summary".bright_green().bold());
    out.push_str(&format!(
        "  {} {}\n",
        "Lines read:".bright_cyan(),
        stats.lines_read.to_string().bright_white()
    ));
    out.push_str(&format!(
        "  {} {}\n",
        "Data lines:".bright_cyan(),
        stats.data_lines.to_string().bright_white()
    ));
    out.push_str(&format!(
        "  {} {} ({:.1}%)\n",
        "Records parsed:".bright_cyan(),
        stats.records_parsed.to_string().bright_white().bold(),
        stats.success_rate()
    ));
    if stats.lines_skipped > 0 {
        out.push_str(&format!(
            "  {} {}\n",
            "Lines skipped:".bright_red(),
            stats.lines_skipped.to_string().bright_red().bold()
        ));
        for skipped in &stats.skipped {
            out.push_str(&format!(
                "    line {}: {}\n",
                skipped.line_number, skipped.reason
            ));
        }
    }
    out
}

/// JSON document for one page, or for every record when `all` is set
pub fn render_json(session: &Session, all: bool, include_stats: bool) -> serde_json::Result<String> {
    let mut doc = if all {
        json!({
            "patient": session.patient(),
            "total_records": session.paginator().len(),
            "records": session.paginator().records(),
        })
    } else {
        json!({
            "patient": session.patient(),
            "page": session.paginator().current_page(),
            "label": session.paginator().current_page().label(),
        })
    };

    if include_stats {
        doc["stats"] = serde_json::to_value(session.stats())?;
    }

    serde_json::to_string_pretty(&doc)
}
