//! Advanced filtering example for countrydex
//!
//! This example works on an inline dataset and shows the filter rules,
//! accent folding and pagination.

use countrydex_core::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== countrydex Advanced Filtering Example ===\n");

    let directory = Directory::from_payload(json!({
        "data": [
            { "name": "Åland Islands", "region": "Europe" },
            { "name": "Albania", "region": "Europe" },
            { "name": "Algeria", "region": "Africa" },
            { "name": "Curaçao", "region": "Americas" },
            { "name": "Iceland", "region": "Europe" },
            { "name": "Ireland", "region": " Europe " },
            { "name": "Poland", "region": "Europe" },
            { "name": "Thailand", "region": "Asia" },
            { "name": "Albania", "region": "Europe" },
            { "name": "Unknown" }
        ]
    }))?;

    // Example 1: Case-insensitive substring, every region
    println!("--- Example 1: 'AL' in any region ---");
    for country in directory.search("AL", ALL_REGIONS) {
        println!("- {} ({})", country.name(), country.region());
    }
    println!();

    // Example 2: Region match ignores case and padding
    println!("--- Example 2: 'land' in region 'europe' ---");
    for country in directory.search("land", "europe") {
        println!("- {}", country.name());
    }
    println!();

    // Example 3: Accent folding
    println!("--- Example 3: 'aland' and 'curacao' with folding ---");
    for query in ["aland", "curacao"] {
        let plain = Criteria::new(query, ALL_REGIONS).apply(directory.countries());
        let folded = Criteria::new(query, ALL_REGIONS)
            .with_mode(MatchMode::Folded)
            .apply(directory.countries());
        println!(
            "{query}: plain={} folded={:?}",
            plain.len(),
            folded.iter().map(|c| c.name()).collect::<Vec<_>>()
        );
    }
    println!();

    // Example 4: Grouping
    println!("--- Example 4: Groups ---");
    for (region, countries) in directory.groups() {
        println!("{region}: {}", countries.len());
    }
    println!();

    // Example 5: Pages of three
    println!("--- Example 5: Pages of three ---");
    let mut state = DirectoryState::default()
        .with_page_size(3)
        .reduce(Action::Loaded(directory.into_countries()));
    loop {
        let view = state.view();
        let names: Vec<_> = view
            .sections
            .iter()
            .flat_map(|s| s.countries.iter().map(|c| c.name()))
            .collect();
        println!("page {}/{}: {:?}", view.pager.page, view.pager.total_pages, names);
        if !view.pager.has_next {
            break;
        }
        state = state.reduce(Action::NextPage);
    }

    Ok(())
}
