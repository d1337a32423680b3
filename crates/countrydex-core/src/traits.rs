// crates/countrydex-core/src/traits.rs
use crate::filter;
use crate::group;
use crate::model::{Country, Directory};
use crate::text::MatchMode;
use indexmap::IndexMap;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`] — case-insensitive equality, ignoring
///   surrounding whitespace in the query
/// - [`NameMatch::name_contains`] — substring match under a [`MatchMode`]
///
/// # Examples
/// ```rust
/// use countrydex_core::text::MatchMode;
/// use countrydex_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Albania").is_named(" albania "));
/// assert!(Place("Åland").name_contains("aland", MatchMode::Folded));
/// assert!(!Place("Åland").name_contains("aland", MatchMode::Lowercase));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.name_str().to_lowercase() == q.trim().to_lowercase()
    }

    /// Returns `true` if the normalized name contains the normalized `q`.
    #[inline]
    fn name_contains(&self, q: &str, mode: MatchMode) -> bool {
        self.name_matches_key(&mode.key(q.trim()), mode)
    }

    /// Like [`NameMatch::name_contains`], for a query already normalized with
    /// [`MatchMode::key`]. Used in loops so the query is folded once.
    #[inline]
    fn name_matches_key(&self, key: &str, mode: MatchMode) -> bool {
        mode.key(self.name_str()).contains(key)
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Read operations shared by everything that holds a country list.
pub trait CountrySearch {
    fn countries(&self) -> &[Country];

    /// Region → countries, see [`group::group`].
    fn groups(&self) -> IndexMap<String, Vec<&Country>> {
        group::group(self.countries())
    }

    /// `"All"` followed by the sorted distinct regions, see [`group::regions`].
    fn regions(&self) -> Vec<String> {
        group::regions(self.countries())
    }

    /// Name/region filter with the default [`MatchMode`], see [`filter::filter`].
    fn search(&self, query: &str, region: &str) -> Vec<&Country> {
        filter::filter(self.countries(), query, region)
    }

    /// First country whose name equals `name`, ignoring case.
    fn find(&self, name: &str) -> Option<&Country> {
        self.countries().iter().find(|c| c.is_named(name))
    }
}

impl CountrySearch for [Country] {
    fn countries(&self) -> &[Country] {
        self
    }
}

impl CountrySearch for Directory {
    fn countries(&self) -> &[Country] {
        Directory::countries(self)
    }
}
