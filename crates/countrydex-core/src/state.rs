// crates/countrydex-core/src/state.rs

//! # Directory State
//!
//! The home page as an immutable snapshot plus a reducer.
//!
//! Every user interaction is an [`Action`]; [`DirectoryState::reduce`]
//! returns the next snapshot and [`DirectoryState::view`] derives what to show
//! (region choices, the current page split into region sections, pager bounds
//! and an optional notice). Nothing is cached between snapshots, so the
//! derived data can never lag behind the inputs.
//!
//! Pagination runs over the flat filtered list; region sections are cut from
//! that page afterwards, so the Previous/Next controls and the visible
//! countries always describe the same list.

use crate::carousel::Carousel;
use crate::filter::Criteria;
use crate::group::{self, ALL_REGIONS};
use crate::model::Country;
use crate::page::{self, PageInfo, PAGE_SIZE};
use crate::text::MatchMode;
use serde::Serialize;
use std::sync::Arc;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch countries. Please try again.";
pub const NO_RESULTS_MESSAGE: &str =
    "No countries found matching the selected region and search query.";

/// Where the country list is in its once-per-load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// User-facing message shown above the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "camelCase")]
pub enum Notice {
    FetchFailed(&'static str),
    NoResults(&'static str),
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::FetchFailed(m) | Notice::NoResults(m) => m,
        }
    }
}

/// State transitions of the home page.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The list fetch succeeded with these validated countries.
    Loaded(Vec<Country>),
    /// The list fetch failed. The previous list is kept.
    LoadFailed,
    SetQuery(String),
    SetRegion(String),
    SetMatchMode(MatchMode),
    /// Re-run the current search (the search button); back to page 1.
    Search,
    SetPage(usize),
    NextPage,
    PrevPage,
    TickCarousel,
}

/// One immutable snapshot of the home page.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryState {
    countries: Arc<[Country]>,
    criteria: Criteria,
    page: usize,
    page_size: usize,
    status: LoadStatus,
    carousel: Carousel,
}

impl Default for DirectoryState {
    fn default() -> Self {
        DirectoryState {
            countries: Arc::from(Vec::new()),
            criteria: Criteria::default(),
            page: 1,
            page_size: PAGE_SIZE,
            status: LoadStatus::Loading,
            carousel: Carousel::default(),
        }
    }
}

/// A region heading and the countries of the current page under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSection<'a> {
    pub region: String,
    pub countries: Vec<&'a Country>,
}

/// Everything the home page renders for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryView<'a> {
    pub status: LoadStatus,
    pub query: &'a str,
    pub region: &'a str,
    pub regions: Vec<String>,
    pub sections: Vec<RegionSection<'a>>,
    pub pager: PageInfo,
    pub notice: Option<Notice>,
    pub carousel: Option<&'a Country>,
}

impl DirectoryState {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn carousel(&self) -> Carousel {
        self.carousel
    }

    /// Apply one action and return the next snapshot.
    pub fn reduce(&self, action: Action) -> DirectoryState {
        let mut next = self.clone();
        match action {
            Action::Loaded(countries) => {
                next.countries = Arc::from(countries);
                next.carousel.fit(next.countries.len());
                next.status = LoadStatus::Ready;
                next.page = 1;
            }
            Action::LoadFailed => {
                next.status = LoadStatus::Failed;
            }
            Action::SetQuery(query) => {
                next.criteria.query = query;
                next.page = 1;
            }
            Action::SetRegion(region) => {
                next.criteria.region = region;
                next.page = 1;
            }
            Action::SetMatchMode(mode) => {
                next.criteria.mode = mode;
                next.page = 1;
            }
            Action::Search => {
                next.page = 1;
            }
            Action::SetPage(page) => {
                next.page = page.max(1);
            }
            Action::NextPage => {
                if self.pager().has_next {
                    next.page += 1;
                }
            }
            Action::PrevPage => {
                if self.page > 1 {
                    next.page -= 1;
                }
            }
            Action::TickCarousel => {
                next.carousel.advance(self.countries.len());
            }
        }
        next
    }

    /// The filtered, deduplicated list across all pages.
    pub fn filtered(&self) -> Vec<&Country> {
        self.criteria.apply(&self.countries)
    }

    pub fn pager(&self) -> PageInfo {
        PageInfo::new(self.filtered().len(), self.page, self.page_size)
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice_for(self.filtered().len())
    }

    fn notice_for(&self, matched: usize) -> Option<Notice> {
        match self.status {
            LoadStatus::Failed => Some(Notice::FetchFailed(FETCH_FAILED_MESSAGE)),
            LoadStatus::Ready if !self.countries.is_empty() && matched == 0 => {
                Some(Notice::NoResults(NO_RESULTS_MESSAGE))
            }
            _ => None,
        }
    }

    /// Derive the rendered page.
    pub fn view(&self) -> DirectoryView<'_> {
        let filtered = self.filtered();
        let current = page::paginate(&filtered, self.page, self.page_size);

        let sections = group::group(&self.countries)
            .into_keys()
            .filter_map(|region| {
                let countries: Vec<&Country> = current
                    .iter()
                    .copied()
                    .filter(|c| c.region.trim() == region)
                    .collect();
                (!countries.is_empty()).then_some(RegionSection { region, countries })
            })
            .collect();

        DirectoryView {
            status: self.status,
            query: &self.criteria.query,
            region: &self.criteria.region,
            regions: group::regions(&self.countries),
            sections,
            pager: PageInfo::new(filtered.len(), self.page, self.page_size),
            notice: self.notice_for(filtered.len()),
            carousel: self.carousel.current(&self.countries),
        }
    }

    /// Whether the region selection is the catch-all sentinel.
    pub fn shows_all_regions(&self) -> bool {
        self.criteria.region == ALL_REGIONS
    }
}
