//! Best-effort country labels for reported addresses.
//!
//! The resolver never fails. A missing database, an address the database
//! does not know, and a backend error each collapse to a placeholder label.

use std::path::Path;

use attackr_common::geo::{GeoRecord, GeoRepository};
use attackr_common::models::address::Ipv4Token;
use attackr_common::models::report::{AddressCount, ReportRow};
use rayon::prelude::*;
use tracing::{debug, info, warn};

pub mod maxmind;

use maxmind::MaxMindRepo;

pub const UNKNOWN_LABEL: &str = "Unknown";
pub const UNAVAILABLE_LABEL: &str = "GeoIP unavailable";

/// Progress notifications while rows are being labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupEvent {
    Started { total: usize },
    Resolved,
}

pub type LookupProgress<'a> = dyn Fn(LookupEvent) + Send + Sync + 'a;

pub struct GeoResolver {
    repo: Option<Box<dyn GeoRepository>>,
}

impl GeoResolver {
    pub fn new(repo: Box<dyn GeoRepository>) -> Self {
        Self { repo: Some(repo) }
    }

    /// Every address gets [`UNAVAILABLE_LABEL`] without a lookup.
    pub fn unavailable() -> Self {
        Self { repo: None }
    }

    /// Opens the MaxMind database at `path`, falling back to unavailable mode
    /// when there is none or it cannot be opened.
    pub fn from_database(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            info!("No GeoIP database configured, countries will not be resolved");
            return Self::unavailable();
        };

        match MaxMindRepo::open(path) {
            Ok(repo) => {
                debug!("loaded GeoIP database {}", path.display());
                Self::new(Box::new(repo))
            }
            Err(err) => {
                warn!("{err:#}; countries will not be resolved");
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.repo.is_some()
    }

    /// Returns a non-empty label for `address`.
    pub fn resolve(&self, address: &Ipv4Token) -> String {
        let Some(repo) = &self.repo else {
            return UNAVAILABLE_LABEL.to_owned();
        };

        match repo.lookup(address) {
            Ok(Some(record)) => label_for(&record),
            Ok(None) => {
                debug!("{address} is not in the GeoIP database");
                UNKNOWN_LABEL.to_owned()
            }
            Err(err) => {
                debug!("lookup for {address} failed: {err}");
                UNKNOWN_LABEL.to_owned()
            }
        }
    }

    /// Attaches a country to every entry, keeping the order it was given.
    pub fn label_rows(
        &self,
        entries: Vec<AddressCount>,
        parallel: bool,
        progress: Option<&LookupProgress<'_>>,
    ) -> Vec<ReportRow> {
        let notify = |event: LookupEvent| {
            if let Some(progress) = progress {
                progress(event);
            }
        };
        notify(LookupEvent::Started { total: entries.len() });

        let label = |entry: AddressCount| {
            let country: String = self.resolve(&entry.address);
            notify(LookupEvent::Resolved);
            ReportRow::new(entry, country)
        };

        // Skip the pool when there is nothing to look up.
        if parallel && self.is_available() {
            entries.into_par_iter().map(label).collect()
        } else {
            entries.into_iter().map(label).collect()
        }
    }
}

fn label_for(record: &GeoRecord) -> String {
    record.label().unwrap_or(UNKNOWN_LABEL).to_owned()
}
