use crate::error::GeoLookupError;
use crate::models::address::Ipv4Token;

/// What a geolocation backend knows about an address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoRecord {
    pub country_name: Option<String>,
    pub country_code: Option<String>,
}

impl GeoRecord {
    /// Most specific non-empty field: full name first, then the ISO code.
    pub fn label(&self) -> Option<&str> {
        [&self.country_name, &self.country_code]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .map(str::trim)
            .find(|value| !value.is_empty())
    }
}

/// Defines the contract for mapping an address to its country of origin.
pub trait GeoRepository: Send + Sync {
    /// Looks up a single address.
    ///
    /// # Returns
    /// * `Ok(Some(record))` - The backend has an entry for the address.
    /// * `Ok(None)` - The backend has no entry for it.
    /// * `Err(_)` - The lookup itself failed.
    fn lookup(&self, address: &Ipv4Token) -> Result<Option<GeoRecord>, GeoLookupError>;
}
