//! Finds failed password events and pulls out the source address.
//!
//! A line qualifies when it contains `Failed password` followed, somewhere
//! later, by `from <a>.<b>.<c>.<d>` where every group is one to three
//! decimal digits. The first `from` that carries such a token wins. A token
//! glued to further digits or dotted groups (`1.2.3.4.5`, `1.2.3.4567`) is
//! not an address and the line is skipped.

use std::sync::LazyLock;

use attackr_common::models::address::Ipv4Token;
use regex::Regex;
use tracing::{debug, trace};

static FAILED_PASSWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Failed password.*?\bfrom\s+([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})(?:[^0-9.]|\.[^0-9]|\.?$)",
    )
    .expect("failed password pattern")
});

/// Returns the address of a single failure line, if it is one.
pub fn extract_address(line: &str) -> Option<Ipv4Token> {
    let captures = FAILED_PASSWORD.captures(line)?;
    captures.get(1).map(|token| Ipv4Token::new(token.as_str()))
}

/// Scans every line, keeping input order. Non-matching lines are skipped.
pub fn extract_failures<I, S>(lines: I) -> Vec<Ipv4Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanned: usize = 0;
    let addresses: Vec<Ipv4Token> = lines
        .into_iter()
        .inspect(|_| scanned += 1)
        .filter_map(|line| {
            let address = extract_address(line.as_ref());
            if let Some(address) = &address {
                trace!("failed password from {address}");
            }
            address
        })
        .collect();

    debug!("{} of {} lines are failed password events", addresses.len(), scanned);
    addresses
}
