//! Error handling example for countrydex
//!
//! Failures never crash the directory: they become messages.

use countrydex_core::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydex Error Handling Example ===\n");

    // Example 1: Invalid base URL
    println!("--- Example 1: Invalid API base URL ---");
    match ApiClient::new(&ApiConfig::with_base_url("not a url")) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: Unreachable API turns into the fetch-failed notice
    println!("--- Example 2: Unreachable API ---");
    let client = ApiClient::new(&ApiConfig::with_base_url("http://127.0.0.1:9"))?;
    let state = match client.fetch_countries() {
        Ok(directory) => DirectoryState::default().reduce(Action::Loaded(directory.into_countries())),
        Err(e) => {
            eprintln!("  fetch error: {e}");
            DirectoryState::default().reduce(Action::LoadFailed)
        }
    };
    if let Some(notice) = state.view().notice {
        println!("  Notice: {}", notice.message());
    }
    println!("  Countries kept: {}", state.countries().len());
    println!();

    // Example 3: Missing snapshot file
    println!("--- Example 3: Missing snapshot ---");
    match Directory::load_from_path("does-not-exist.json.gz") {
        Ok(_) => println!("  loaded?"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 4: Detail lookup failure
    println!("--- Example 4: Detail failure ---");
    let detail = DetailState::from_fetch(client.fetch_country("Atlantis"));
    println!("  {}", detail.message().unwrap_or("loaded"));

    Ok(())
}
