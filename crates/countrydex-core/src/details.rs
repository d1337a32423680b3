// crates/countrydex-core/src/details.rs

//! Country detail page projection.
//!
//! Turns the loosely typed pass-through fields of a country record into
//! display strings. Missing values become [`NOT_AVAILABLE`]; nothing here
//! fails on odd shapes, it just shows less.

use crate::model::Country;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_BORDERS: &str = "No bordering countries.";
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to load country data.";
pub const DETAIL_LOADING_MESSAGE: &str = "Loading country details...";

/// Everything the detail page shows for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryDetails {
    pub name: String,
    pub flag: Option<String>,
    pub capital: String,
    pub region: String,
    pub subregion: String,
    pub population: String,
    pub area: String,
    pub languages: String,
    pub currency: String,
    /// Border country codes; each one is itself a detail route.
    pub borders: Vec<String>,
}

impl CountryDetails {
    /// Project a validated list entry.
    pub fn from_country(country: &Country) -> Self {
        Self::build(
            Some(country.name()),
            Some(country.region()),
            country.flag(),
            &country.extra,
        )
    }

    /// Project the payload of the detail endpoint.
    ///
    /// Unlike list entries, detail records are not validated: any JSON object
    /// is shown with whatever it carries. Non-objects give `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        Some(Self::build(
            fields.get("name").and_then(display_name),
            fields.get("region").and_then(Value::as_str),
            fields.get("flag").and_then(Value::as_str),
            fields,
        ))
    }

    fn build(
        name: Option<&str>,
        region: Option<&str>,
        flag: Option<&str>,
        fields: &Map<String, Value>,
    ) -> Self {
        CountryDetails {
            name: name.unwrap_or(NOT_AVAILABLE).to_string(),
            flag: flag.map(str::to_string),
            capital: or_na(fields.get("capital").and_then(text_list)),
            region: or_na(region.map(str::to_string)),
            subregion: or_na(fields.get("subregion").and_then(text_list)),
            population: or_na(fields.get("population").and_then(population)),
            area: or_na(fields.get("area").and_then(area)),
            languages: or_na(fields.get("languages").and_then(text_list)),
            currency: or_na(fields.get("currencies").and_then(first_currency)),
            borders: fields.get("borders").map(strings).unwrap_or_default(),
        }
    }
}

impl fmt::Display for CountryDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        if let Some(flag) = &self.flag {
            writeln!(f, "Flag: {flag}")?;
        }
        writeln!(f, "Capital: {}", self.capital)?;
        writeln!(f, "Region: {}", self.region)?;
        writeln!(f, "Subregion: {}", self.subregion)?;
        writeln!(f, "Population: {}", self.population)?;
        writeln!(f, "Area: {}", self.area)?;
        writeln!(f, "Languages: {}", self.languages)?;
        writeln!(f, "Currency: {}", self.currency)?;
        write!(f, "Border Countries: ")?;
        if self.borders.is_empty() {
            write!(f, "{NO_BORDERS}")
        } else {
            write!(f, "{}", self.borders.join(", "))
        }
    }
}

/// Detail page lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum DetailState {
    Loading,
    Loaded(CountryDetails),
    Failed(String),
}

impl DetailState {
    /// Collapse a fetch outcome. A missing record is shown as a failure, the
    /// page never waits on data that is not coming.
    pub fn from_fetch<E: fmt::Display>(outcome: Result<Option<CountryDetails>, E>) -> Self {
        match outcome {
            Ok(Some(details)) => DetailState::Loaded(details),
            Ok(None) => DetailState::Failed(DETAIL_FAILED_MESSAGE.to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "country detail fetch failed");
                DetailState::Failed(DETAIL_FAILED_MESSAGE.to_string())
            }
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            DetailState::Loading => Some(DETAIL_LOADING_MESSAGE),
            DetailState::Loaded(_) => None,
            DetailState::Failed(message) => Some(message),
        }
    }
}

fn or_na(value: Option<String>) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn display_name(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s),
        Value::Object(o) => o.get("common").and_then(Value::as_str),
        _ => None,
    }
}

/// A string, or the string items of an array / values of an object joined
/// with `", "`.
fn text_list(value: &Value) -> Option<String> {
    let items = strings(value);
    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}

fn strings(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s.clone()],
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        Value::Object(map) => map.values().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn population(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => n.as_f64().map(format_number),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn area(value: &Value) -> Option<String> {
    let n = value.as_f64().filter(|n| *n != 0.0)?;
    Some(format!("{} km²", format_number(n)))
}

/// `{"EUR": {"name": "Euro"}}`, `[{"name": "Euro"}]` or `["Euro"]` → `"Euro"`.
fn first_currency(value: &Value) -> Option<String> {
    let first = match value {
        Value::Object(map) => map.values().next()?,
        Value::Array(items) => items.first()?,
        Value::String(s) => return Some(s.clone()),
        _ => return None,
    };
    match first {
        Value::String(s) => Some(s.clone()),
        Value::Object(o) => o.get("name").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// en-US style number: thousands separators, at most three decimals.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let rounded = (n.abs() * 1000.0).round() / 1000.0;
    let whole = rounded.trunc();
    let mut out = group_digits(&format!("{whole:.0}"));
    let frac = rounded - whole;
    if frac > 0.0 {
        let decimals = format!("{frac:.3}");
        let decimals = decimals.trim_start_matches('0').trim_end_matches('0');
        if decimals != "." {
            out.push_str(decimals);
        }
    }
    if n < 0.0 && out != "0" {
        out.insert(0, '-');
    }
    out
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn formats_numbers_like_a_locale_string() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(38_928_341.0), "38,928,341");
        assert_eq!(format_number(1580.5), "1,580.5");
        assert_eq!(format_number(2.0004), "2");
        assert_eq!(format_number(-1234.25), "-1,234.25");
    }

    #[test]
    fn full_record() {
        let value = json!({
            "name": "Germany",
            "flag": "https://flagcdn.com/de.svg",
            "capital": "Berlin",
            "region": "Europe",
            "subregion": "Western Europe",
            "population": 83240525,
            "area": 357114.0,
            "languages": { "deu": "German" },
            "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
            "borders": ["AUT", "BEL", "CZE"]
        });
        let d = CountryDetails::from_value(&value).unwrap();
        assert_eq!(d.name, "Germany");
        assert_eq!(d.capital, "Berlin");
        assert_eq!(d.population, "83,240,525");
        assert_eq!(d.area, "357,114 km²");
        assert_eq!(d.languages, "German");
        assert_eq!(d.currency, "Euro");
        assert_eq!(d.borders, ["AUT", "BEL", "CZE"]);
    }

    #[test]
    fn sparse_record_falls_back_to_na() {
        let d = CountryDetails::from_value(&json!({ "name": "Atlantis" })).unwrap();
        assert_eq!(d.capital, NOT_AVAILABLE);
        assert_eq!(d.region, NOT_AVAILABLE);
        assert_eq!(d.population, NOT_AVAILABLE);
        assert_eq!(d.area, NOT_AVAILABLE);
        assert_eq!(d.languages, NOT_AVAILABLE);
        assert_eq!(d.currency, NOT_AVAILABLE);
        assert!(d.borders.is_empty());
        assert!(d.to_string().ends_with(NO_BORDERS));
    }

    #[test]
    fn alternative_shapes() {
        let d = CountryDetails::from_value(&json!({
            "name": { "common": "Chile" },
            "capital": ["Santiago"],
            "languages": ["Spanish", "Mapudungun"],
            "currencies": [{ "code": "CLP", "name": "Chilean peso" }],
            "area": 0,
            "population": 0
        }))
        .unwrap();
        assert_eq!(d.name, "Chile");
        assert_eq!(d.capital, "Santiago");
        assert_eq!(d.languages, "Spanish, Mapudungun");
        assert_eq!(d.currency, "Chilean peso");
        assert_eq!(d.area, NOT_AVAILABLE);
        assert_eq!(d.population, "0");
    }

    #[test]
    fn from_list_entry() {
        let c = Country::from_value(json!({
            "name": "Aland",
            "region": " Europe ",
            "borders": []
        }))
        .unwrap();
        let d = CountryDetails::from_country(&c);
        assert_eq!(d.region, "Europe");
        assert!(d.borders.is_empty());
    }

    #[test]
    fn non_object_payload() {
        assert!(CountryDetails::from_value(&json!(null)).is_none());
        assert!(CountryDetails::from_value(&json!([1, 2])).is_none());
    }

    #[test]
    fn detail_state_from_fetch() {
        let ok: Result<_, String> = Ok(CountryDetails::from_value(&json!({ "name": "X" })));
        assert!(matches!(DetailState::from_fetch(ok), DetailState::Loaded(_)));

        let missing: Result<Option<CountryDetails>, String> = Ok(None);
        assert_eq!(
            DetailState::from_fetch(missing).message(),
            Some(DETAIL_FAILED_MESSAGE)
        );

        let failed: Result<Option<CountryDetails>, String> = Err("boom".into());
        assert_eq!(
            DetailState::from_fetch(failed),
            DetailState::Failed(DETAIL_FAILED_MESSAGE.to_string())
        );
        assert_eq!(DetailState::Loading.message(), Some(DETAIL_LOADING_MESSAGE));
    }
}
