use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::address::Ipv4Token;
use crate::models::threshold::Threshold;

/// Failures per address, built by accumulation.
pub type FailureCount = HashMap<Ipv4Token, u64>;

/// An address that passed the threshold, before geolocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressCount {
    pub count: u64,
    pub address: Ipv4Token,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub count: u64,
    pub address: Ipv4Token,
    pub country: String,
}

impl ReportRow {
    pub fn new(entry: AddressCount, country: impl Into<String>) -> Self {
        Self {
            count: entry.count,
            address: entry.address,
            country: country.into(),
        }
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub generated_on: NaiveDate,
    pub threshold: Threshold,
    /// Ascending by count, then by address text.
    pub rows: Vec<ReportRow>,
    pub lines_scanned: usize,
    pub failures_matched: usize,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
