// crates/countrydex-core/src/group.rs
use crate::model::Country;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Sentinel region that selects every country. Never a real region value.
pub const ALL_REGIONS: &str = "All";

/// Partition `countries` by trimmed region.
///
/// Keys appear in the order their region is first seen; inside a group the
/// input order is preserved. Every country lands in exactly one group.
pub fn group(countries: &[Country]) -> IndexMap<String, Vec<&Country>> {
    let mut groups: IndexMap<String, Vec<&Country>> = IndexMap::new();
    for country in countries {
        groups
            .entry(country.region.trim().to_string())
            .or_default()
            .push(country);
    }
    groups
}

/// The region choices offered to the user: `"All"` first, then every distinct
/// trimmed region in ascending order.
pub fn regions(countries: &[Country]) -> Vec<String> {
    let distinct: BTreeSet<&str> = countries.iter().map(|c| c.region.trim()).collect();
    std::iter::once(ALL_REGIONS.to_string())
        .chain(distinct.into_iter().map(str::to_string))
        .collect()
}
