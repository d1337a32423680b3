// crates/countrydex-core/src/lib.rs

//! # countrydex-core
//!
//! The engine behind the country directory: it turns the raw `{ "data": [...] }`
//! payload of the countries API into a validated list, groups it by region,
//! filters it by name and region, paginates the result and drives the flag
//! carousel.
//!
//! Everything except the optional HTTP client is pure and synchronous, so the
//! same code runs in the CLI and in the browser (through `countrydex-wasm`).
//!
//! ```rust
//! use countrydex_core::prelude::*;
//! use serde_json::json;
//!
//! let directory = Directory::from_records(vec![
//!     json!({ "name": "Aland", "region": "Europe" }),
//!     json!({ "name": "Albania", "region": "Europe" }),
//!     json!({ "name": "Zambia", "region": " Africa " }),
//!     json!({ "region": "Nowhere" }),
//! ]);
//!
//! assert_eq!(directory.stats().dropped, 1);
//! assert_eq!(directory.regions(), ["All", "Africa", "Europe"]);
//!
//! let hits: Vec<_> = directory.search("AL", ALL_REGIONS).into_iter().map(|c| c.name()).collect();
//! assert_eq!(hits, ["Aland", "Albania"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod carousel;
#[cfg(feature = "fetch")]
pub mod client;
pub mod details;
pub mod error;
pub mod filter;
pub mod group;
pub mod loader;
pub mod model;
pub mod page;
pub mod prelude;
pub mod state;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{DexError, Result};
pub use crate::model::{Country, Directory, DirectoryStats};
pub use crate::traits::{CountrySearch, NameMatch};
