use std::collections::HashMap;
use std::io::Write;

use attackr_common::error::GeoLookupError;
use attackr_common::geo::{GeoRecord, GeoRepository};
use attackr_common::models::address::Ipv4Token;
use chrono::NaiveDate;
use tempfile::NamedTempFile;

pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 29).unwrap()
}

pub fn failed(address: &str) -> String {
    format!("Oct 29 03:12:45 bastion sshd[4121]: Failed password for invalid user admin from {address} port 40112 ssh2")
}

/// Writes `lines` to a temporary log, `times` failures per address.
pub fn log_file(failures: &[(&str, usize)], noise: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for (address, times) in failures {
        for _ in 0..*times {
            writeln!(file, "{}", failed(address)).unwrap();
        }
    }
    for line in noise {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// In-memory geolocation backend. Addresses in `failing` return an error.
#[derive(Default)]
pub struct StubGeo {
    countries: HashMap<String, GeoRecord>,
    failing: Vec<String>,
}

impl StubGeo {
    pub fn with_country(mut self, address: &str, name: &str, code: &str) -> Self {
        let record = GeoRecord {
            country_name: Some(name.to_owned()),
            country_code: Some(code.to_owned()),
        };
        self.countries.insert(address.to_owned(), record);
        self
    }

    pub fn failing_for(mut self, address: &str) -> Self {
        self.failing.push(address.to_owned());
        self
    }
}

impl GeoRepository for StubGeo {
    fn lookup(&self, address: &Ipv4Token) -> Result<Option<GeoRecord>, GeoLookupError> {
        if self.failing.iter().any(|failing| failing == address.as_str()) {
            return Err(GeoLookupError::Backend(format!("lookup of {address} timed out")));
        }
        Ok(self.countries.get(address.as_str()).cloned())
    }
}
