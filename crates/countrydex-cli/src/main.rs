//! countrydex — country directory in the terminal
//!
//! Usage examples
//! --------------
//!
//! - Search by name across all regions
//!   $ countrydex countries --query al
//!
//! - One region, second page
//!   $ countrydex countries --region Europe --page 2
//!
//! - Country details (border codes are themselves valid arguments)
//!   $ countrydex country Germany
//!   $ countrydex country AUT
//!
//! - Flag carousel, one step per second
//!   $ countrydex carousel --ticks 10 --interval-ms 1000
//!
//! Data source
//! -----------
//!
//! By default every command fetches the list from the public countries API.
//! Use `--input <path>` to read a saved response (`.json` or `.json.gz`)
//! instead; `country` then looks the name up in that file.
mod args;
mod render;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use countrydex_core::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;

/// Where countries come from for this run.
enum Source {
    File(PathBuf),
    #[cfg(feature = "fetch")]
    Api(ApiClient),
}

impl Source {
    fn from_args(args: &CliArgs) -> anyhow::Result<Self> {
        if let Some(path) = &args.input {
            return Ok(Source::File(path.clone()));
        }
        #[cfg(feature = "fetch")]
        {
            let client = ApiClient::new(&ApiConfig::with_base_url(&args.base_url))
                .with_context(|| format!("cannot use API at {}", args.base_url))?;
            Ok(Source::Api(client))
        }
        #[cfg(not(feature = "fetch"))]
        {
            bail!("built without the 'fetch' feature; pass --input <file>")
        }
    }

    fn load(&self) -> Result<Directory> {
        match self {
            Source::File(path) => Directory::load_from_path(path),
            #[cfg(feature = "fetch")]
            Source::Api(client) => client.fetch_countries(),
        }
    }

    fn country(&self, name: &str) -> Result<Option<CountryDetails>> {
        match self {
            Source::File(path) => {
                let directory = Directory::load_from_path(path)?;
                Ok(directory.find(name).map(CountryDetails::from_country))
            }
            #[cfg(feature = "fetch")]
            Source::Api(client) => client.fetch_country(name),
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Print `ticks` carousel steps, driven by a timer on a current-thread runtime.
#[cfg(feature = "driver")]
fn run_carousel(countries: Arc<Vec<Country>>, interval: Duration, ticks: usize) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("cannot start the carousel timer")?;

    runtime.block_on(async {
        let len_source = Arc::clone(&countries);
        let mut driver = CarouselDriver::spawn(interval, move || len_source.len());
        for _ in 0..ticks {
            let Some(index) = driver.next().await else {
                break;
            };
            if let Some(country) = countries.get(index) {
                println!("{}", render::flag(country));
            }
        }
        driver.cancel();
    });
    Ok(())
}

#[cfg(not(feature = "driver"))]
fn run_carousel(_countries: Arc<Vec<Country>>, _interval: Duration, _ticks: usize) -> anyhow::Result<()> {
    bail!("built without the 'driver' feature")
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);
    let source = Source::from_args(&args)?;

    match args.command {
        Commands::Stats => {
            let stats = source.load()?.stats();
            println!("Directory statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Regions: {}", stats.regions);
            println!("  Dropped records: {}", stats.dropped);
        }

        Commands::Regions => {
            for region in source.load()?.regions() {
                println!("{region}");
            }
        }

        Commands::Countries {
            query,
            region,
            page,
            page_size,
            fold,
        } => {
            let initial = DirectoryState::default().with_page_size(page_size);
            let loaded = match source.load() {
                Ok(directory) => initial.reduce(Action::Loaded(directory.into_countries())),
                Err(e) => {
                    tracing::warn!(error = %e, "could not load countries");
                    initial.reduce(Action::LoadFailed)
                }
            };
            let mode = if fold {
                MatchMode::Folded
            } else {
                MatchMode::Lowercase
            };
            let state = loaded
                .reduce(Action::SetMatchMode(mode))
                .reduce(Action::SetQuery(query))
                .reduce(Action::SetRegion(region))
                .reduce(Action::SetPage(page));
            print!("{}", render::directory(&state.view()));
        }

        Commands::Country { name } => {
            let detail = DetailState::from_fetch(source.country(&name));
            print!("{}", render::detail(&detail));
        }

        Commands::Carousel { ticks, interval_ms } => {
            let countries = Arc::new(source.load()?.into_countries());
            if countries.is_empty() {
                println!("No countries to show.");
                return Ok(());
            }
            if interval_ms == 0 {
                bail!("--interval-ms must be greater than zero");
            }

            println!("{}", render::flag(&countries[0]));
            run_carousel(countries, Duration::from_millis(interval_ms), ticks)?;
        }
    }

    Ok(())
}
