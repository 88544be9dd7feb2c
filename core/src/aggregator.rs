use attackr_common::models::address::Ipv4Token;
use attackr_common::models::report::{AddressCount, FailureCount};
use attackr_common::models::threshold::Threshold;
use tracing::debug;

/// Counts occurrences per address.
pub fn tally<I>(addresses: I) -> FailureCount
where
    I: IntoIterator<Item = Ipv4Token>,
{
    let mut counts = FailureCount::new();
    for address in addresses {
        *counts.entry(address).or_insert(0) += 1;
    }
    counts
}

/// Keeps addresses at or above `threshold`, ascending by count.
///
/// Equal counts are ordered by address text so repeated runs print the same
/// report.
pub fn select(counts: FailureCount, threshold: Threshold) -> Vec<AddressCount> {
    let distinct: usize = counts.len();
    let mut selected: Vec<AddressCount> = counts
        .into_iter()
        .filter(|(_, count)| threshold.admits(*count))
        .map(|(address, count)| AddressCount { count, address })
        .collect();

    selected.sort_by(|a, b| a.count.cmp(&b.count).then_with(|| a.address.cmp(&b.address)));

    debug!(
        "{} of {} distinct addresses reached the threshold of {}",
        selected.len(),
        distinct,
        threshold
    );
    selected
}

pub fn aggregate<I>(addresses: I, threshold: Threshold) -> Vec<AddressCount>
where
    I: IntoIterator<Item = Ipv4Token>,
{
    select(tally(addresses), threshold)
}
