//! Plain text layout of the attacker report.
//!
//! The CLI colours these same strings; nothing here emits escape codes.

use attackr_common::models::report::{Report, ReportRow};
use attackr_common::models::threshold::Threshold;
use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

pub const COUNT_WIDTH: usize = 8;
pub const ADDRESS_WIDTH: usize = 20;
pub const COUNTRY_WIDTH: usize = 15;

pub fn title(date: NaiveDate) -> String {
    format!("Attacker Report - {}", date.format("%B %d, %Y"))
}

pub fn header_row() -> String {
    columns("COUNT", "IP ADDRESS", "COUNTRY")
}

pub fn row_line(row: &ReportRow) -> String {
    columns(&row.count.to_string(), row.address.as_str(), &row.country)
}

pub fn empty_message(threshold: Threshold) -> String {
    format!("No IP addresses with {threshold} or more failed attempts were found.")
}

/// One printed line of the report, tagged with its role so callers can style it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Title(String),
    Blank,
    Header(String),
    Row(String),
    Empty(String),
}

impl ReportLine {
    pub fn text(&self) -> &str {
        match self {
            Self::Title(text) | Self::Header(text) | Self::Row(text) | Self::Empty(text) => text,
            Self::Blank => "",
        }
    }
}

/// Lays out the report: title, header, then one line per row in the order
/// given, or the explanatory line when there are no rows.
pub fn lines(report: &Report) -> Vec<ReportLine> {
    let mut lines: Vec<ReportLine> = vec![
        ReportLine::Title(title(report.generated_on)),
        ReportLine::Blank,
        ReportLine::Header(header_row()),
    ];

    if report.is_empty() {
        lines.push(ReportLine::Blank);
        lines.push(ReportLine::Empty(empty_message(report.threshold)));
    } else {
        lines.extend(report.rows.iter().map(|row| ReportLine::Row(row_line(row))));
    }
    lines
}

/// Renders the whole report as plain text.
pub fn render(report: &Report) -> String {
    lines(report)
        .iter()
        .map(|line| format!("{}\n", line.text()))
        .collect()
}

fn columns(count: &str, address: &str, country: &str) -> String {
    let line: String = [
        pad(count, COUNT_WIDTH),
        pad(address, ADDRESS_WIDTH),
        pad(country, COUNTRY_WIDTH),
    ]
    .concat();
    line.trim_end().to_owned()
}

/// Left aligns `text` in `width` display columns, always leaving at least
/// one trailing space.
fn pad(text: &str, width: usize) -> String {
    let used: usize = UnicodeWidthStr::width(text);
    let fill: usize = width.saturating_sub(used).max(1);
    format!("{text}{}", " ".repeat(fill))
}
