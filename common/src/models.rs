//! Value types that flow through the report pipeline.
//!
//! * [`address::Ipv4Token`]: an address as it was written in the log.
//! * [`threshold::Threshold`]: the minimum failure count for inclusion.
//! * [`report::AddressCount`], [`report::ReportRow`], [`report::Report`]: the
//!   aggregated and enriched results.

pub mod address;
pub mod report;
pub mod threshold;
