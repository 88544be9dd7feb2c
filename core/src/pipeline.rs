//! # Attacker Report Pipeline
//!
//! Runs the report end to end: read the log, pull out failed password
//! addresses, count them against the threshold, then label each survivor
//! with its country.
//!
//! Only the log source can fail a run. Everything after it degrades to
//! placeholder values instead.

use attackr_common::config::Config;
use attackr_common::error::LogSourceError;
use attackr_common::models::report::{AddressCount, Report, ReportRow};
use attackr_common::models::threshold::Threshold;
use attackr_common::source::LineSource;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::aggregator;
use crate::extractor;
use crate::geo::{GeoResolver, LookupProgress};
use crate::source::FileLineSource;

/// Orchestrates one report run by:
/// 1. reading every line from the [`LineSource`].
/// 2. extracting and aggregating the failed password addresses.
/// 3. enriching the survivors through the [`GeoResolver`].
pub struct Pipeline {
    source: Box<dyn LineSource>,
    resolver: GeoResolver,
    threshold: Threshold,
    parallel_lookups: bool,
    progress: Option<Box<LookupProgress<'static>>>,
}

impl Pipeline {
    pub fn new(source: Box<dyn LineSource>, resolver: GeoResolver, threshold: Threshold) -> Self {
        Self {
            source,
            resolver,
            threshold,
            parallel_lookups: false,
            progress: None,
        }
    }

    /// Reads `config.log_path` and resolves through `config.geoip_db`.
    pub fn from_config(config: &Config) -> Self {
        let source = FileLineSource::new(&config.log_path);
        let resolver = GeoResolver::from_database(config.geoip_db.as_deref());
        Self::new(Box::new(source), resolver, config.threshold)
            .with_parallel_lookups(config.parallel_lookups)
    }

    pub fn with_parallel_lookups(mut self, parallel: bool) -> Self {
        self.parallel_lookups = parallel;
        self
    }

    pub fn with_progress(mut self, progress: Box<LookupProgress<'static>>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Runs the pipeline dated today.
    pub fn run(&self) -> Result<Report, LogSourceError> {
        self.run_on(Local::now().date_naive())
    }

    pub fn run_on(&self, generated_on: NaiveDate) -> Result<Report, LogSourceError> {
        debug!("reading {}", self.source.describe());
        let lines: Vec<String> = self.source.read_lines()?;

        let addresses = extractor::extract_failures(&lines);
        let failures_matched: usize = addresses.len();

        let selected: Vec<AddressCount> = aggregator::aggregate(addresses, self.threshold);
        info!("{}", summary(lines.len(), failures_matched, selected.len()));

        let rows: Vec<ReportRow> = self.resolver.label_rows(
            selected,
            self.parallel_lookups,
            self.progress.as_deref(),
        );

        Ok(Report {
            generated_on,
            threshold: self.threshold,
            rows,
            lines_scanned: lines.len(),
            failures_matched,
        })
    }
}

fn summary(lines_scanned: usize, failures_matched: usize, over_threshold: usize) -> String {
    format!(
        "Scanned {lines_scanned} lines, {failures_matched} failed password events, \
         addresses over threshold: {over_threshold}"
    )
}
