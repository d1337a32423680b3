//! countrydex-cli
//! ==============
//!
//! Command-line front end for the `countrydex-core` country directory.
//!
//! This crate primarily provides a binary (`countrydex`). The library target
//! only exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! countrydex countries --query al
//! countrydex countries --region Africa --page 2
//! countrydex country "United States"
//! countrydex --input countries.json.gz carousel --ticks 3
//! ```
//!
//! For programmatic access use `countrydex-core` directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
