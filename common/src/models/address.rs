use std::fmt;
use std::net::Ipv4Addr;

/// An IPv4 address exactly as it appeared in the log.
///
/// Equality, hashing and ordering use the text form, so `010.0.0.1` and
/// `10.0.0.1` are different tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ipv4Token(String);

impl Ipv4Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the token into a real address.
    ///
    /// Tokens captured by the extractor only guarantee four groups of one to
    /// three digits, so octets above 255 yield `None`.
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        self.0.parse().ok()
    }
}

impl fmt::Display for Ipv4Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Ipv4Token {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
