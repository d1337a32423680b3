// crates/countrydex-core/src/text.rs

/// Convert a string into a folded key suitable for accent-insensitive matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// ```rust
/// use countrydex_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// How names are compared against a search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Plain Unicode lower-casing. `"al"` does not find `"Åland"`.
    #[default]
    Lowercase,
    /// Lower-casing after transliteration with [`fold_key`].
    Folded,
}

impl MatchMode {
    /// Normalize `s` into the comparison key for this mode.
    pub fn key(self, s: &str) -> String {
        match self {
            MatchMode::Lowercase => s.to_lowercase(),
            MatchMode::Folded => fold_key(s),
        }
    }
}
