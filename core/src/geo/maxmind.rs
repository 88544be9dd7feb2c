use std::net::IpAddr;
use std::path::Path;

use anyhow::Context;
use attackr_common::error::GeoLookupError;
use attackr_common::geo::{GeoRecord, GeoRepository};
use attackr_common::models::address::Ipv4Token;
use maxminddb::{MaxMindDBError, Reader, geoip2};

const NAME_LOCALE: &str = "en";

/// GeoLite2 / GeoIP2 country or city database on disk.
pub struct MaxMindRepo {
    reader: Reader<Vec<u8>>,
}

impl MaxMindRepo {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let reader = Reader::open_readfile(path)
            .with_context(|| format!("failed to open GeoIP database {}", path.display()))?;
        Ok(Self { reader })
    }
}

impl GeoRepository for MaxMindRepo {
    fn lookup(&self, address: &Ipv4Token) -> Result<Option<GeoRecord>, GeoLookupError> {
        let ip = address
            .to_ipv4()
            .ok_or_else(|| GeoLookupError::InvalidAddress(address.to_string()))?;

        match self.reader.lookup::<geoip2::Country>(IpAddr::V4(ip)) {
            Ok(country) => Ok(Some(to_record(country))),
            Err(MaxMindDBError::AddressNotFoundError(_)) => Ok(None),
            Err(err) => Err(GeoLookupError::Backend(err.to_string())),
        }
    }
}

fn to_record(found: geoip2::Country<'_>) -> GeoRecord {
    let Some(country) = found.country else {
        return GeoRecord::default();
    };

    GeoRecord {
        country_name: country
            .names
            .and_then(|names| names.get(NAME_LOCALE).map(|name| (*name).to_owned())),
        country_code: country.iso_code.map(str::to_owned),
    }
}
