// crates/countrydex-core/src/filter.rs
use crate::group::ALL_REGIONS;
use crate::model::Country;
use crate::text::MatchMode;
use crate::traits::NameMatch;
use std::collections::HashSet;

/// The name/region predicate pair that decides what the list shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub query: String,
    pub region: String,
    pub mode: MatchMode,
}

impl Default for Criteria {
    fn default() -> Self {
        Criteria {
            query: String::new(),
            region: ALL_REGIONS.to_string(),
            mode: MatchMode::default(),
        }
    }
}

impl Criteria {
    pub fn new(query: impl Into<String>, region: impl Into<String>) -> Self {
        Criteria {
            query: query.into(),
            region: region.into(),
            mode: MatchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Apply to `countries`. See [`filter`] for the exact rules.
    pub fn apply<'a>(&self, countries: &'a [Country]) -> Vec<&'a Country> {
        let key = self.mode.key(self.query.trim());
        let region = self.region.to_lowercase();
        let all = self.region == ALL_REGIONS;

        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();
        for country in countries {
            if !all && country.region.trim().to_lowercase() != region {
                continue;
            }
            if !country.name_matches_key(&key, self.mode) {
                continue;
            }
            if seen.insert(country.name.as_str()) {
                out.push(country);
            }
        }
        out
    }
}

/// Countries whose name contains `query` and whose region matches `region`.
///
/// - `query` is trimmed and lower-cased; the empty query matches every name.
/// - `region == "All"` (exact, case-sensitive) matches every region; any other
///   value must equal the country's trimmed region ignoring case.
/// - Duplicate names keep only their first match.
///
/// The result keeps input order. An empty result is not an error.
pub fn filter<'a>(countries: &'a [Country], query: &str, region: &str) -> Vec<&'a Country> {
    Criteria::new(query, region).apply(countries)
}
