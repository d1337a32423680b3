use clap::{ArgAction, Parser, Subcommand};
use countrydex_core::group::ALL_REGIONS;
use countrydex_core::page::PAGE_SIZE;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
const DEFAULT_BASE_URL: &str = countrydex_core::client::DEFAULT_BASE_URL;
#[cfg(not(feature = "fetch"))]
const DEFAULT_BASE_URL: &str = "";

/// CLI arguments for countrydex
#[derive(Debug, Parser)]
#[command(
    name = "countrydex",
    version,
    about = "Browse countries by name and region, page through them and look up details"
)]
pub struct CliArgs {
    /// Read countries from a saved API response (.json or .json.gz) instead of the API
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Base URL of the countries API
    #[arg(long = "base-url", global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log more (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show how many countries and regions were loaded
    Stats,

    /// List the region choices
    Regions,

    /// Search and page through countries, grouped by region
    Countries {
        /// Case-insensitive substring of the country name
        #[arg(short = 'q', long = "query", default_value = "")]
        query: String,

        /// Region to show, or "All"
        #[arg(short = 'r', long = "region", default_value = ALL_REGIONS)]
        region: String,

        /// Page number, starting at 1
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: usize,

        /// Countries per page
        #[arg(long = "page-size", default_value_t = PAGE_SIZE)]
        page_size: usize,

        /// Ignore accents when matching names ("aland" finds "Åland")
        #[arg(long = "fold")]
        fold: bool,
    },

    /// Show details for one country, by name or code
    Country {
        /// Country name or code (e.g. "Germany", DEU)
        name: String,
    },

    /// Cycle through the flags of all countries
    Carousel {
        /// Number of steps before exiting
        #[arg(long = "ticks", default_value_t = 5)]
        ticks: usize,

        /// Milliseconds between steps
        #[arg(long = "interval-ms", default_value_t = 3000)]
        interval_ms: u64,
    },
}
