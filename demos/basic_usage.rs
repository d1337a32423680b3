//! Basic usage example for countrydex
//!
//! This example demonstrates how to:
//! - Fetch the country list from the public API
//! - List regions and search by name
//! - Page through results
//! - Look up one country's details

use countrydex_core::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydex Basic Usage Example ===\n");

    // Fetch the list
    println!("Fetching countries from {DEFAULT_BASE_URL} ...");
    let client = ApiClient::new(&ApiConfig::default())?;
    let directory = client.fetch_countries()?;
    let stats = directory.stats();
    println!(
        "✓ {} countries in {} regions ({} records dropped)\n",
        stats.countries, stats.regions, stats.dropped
    );

    // Example 1: Region choices
    println!("--- Example 1: Regions ---");
    for region in directory.regions() {
        println!("- {region}");
    }
    println!();

    // Example 2: Search by name
    println!("--- Example 2: Countries containing 'land' ---");
    for country in directory.search("land", ALL_REGIONS) {
        println!("- {} ({})", country.name(), country.region());
    }
    println!();

    // Example 3: First page, grouped by region
    println!("--- Example 3: First page of Europe ---");
    let state = DirectoryState::default()
        .reduce(Action::Loaded(directory.countries().to_vec()))
        .reduce(Action::SetRegion("Europe".into()));
    let view = state.view();
    for section in &view.sections {
        println!("{}:", section.region);
        for country in &section.countries {
            println!("  {}", country.name());
        }
    }
    println!(
        "Page {}/{} (next page: {})\n",
        view.pager.page, view.pager.total_pages, view.pager.has_next
    );

    // Example 4: Detail lookup
    println!("--- Example 4: Country details ---");
    match DetailState::from_fetch(client.fetch_country("Germany")) {
        DetailState::Loaded(details) => println!("{details}"),
        other => println!("{}", other.message().unwrap_or_default()),
    }

    Ok(())
}
