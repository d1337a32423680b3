// crates/countrydex-core/src/model.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw list payload as it comes from the API: `{ "data": [...] }`.
///
/// A missing or `null` `data` field is an empty list. Entries are kept as raw
/// JSON so that malformed records can be dropped one by one instead of failing
/// the whole payload.
#[derive(Debug, Default, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Value>>,
}

/// Raw detail payload: `{ "data": { ...country... } }`.
#[derive(Debug, Default, Deserialize)]
pub struct DetailEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
}

/// A validated country record.
///
/// Only `name`, `region` and `flag` are understood by the engines. Every other
/// field the API sends (capital, population, languages, borders, ...) is kept
/// untouched in [`Country::extra`] and handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Country {
    pub name: String,
    /// Trimmed region name, never empty.
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Country {
    /// Validate one raw record.
    ///
    /// Returns `None` unless the record is an object whose `name` is a
    /// non-empty string and whose `region` is a string that is not blank.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };

        let name = match fields.remove("name") {
            Some(Value::String(name)) if !name.is_empty() => name,
            _ => return None,
        };

        let region = match fields.remove("region") {
            Some(Value::String(region)) => region.trim().to_string(),
            _ => return None,
        };
        if region.is_empty() {
            return None;
        }

        let flag = match fields.remove("flag") {
            Some(Value::String(url)) => Some(url),
            Some(other) => {
                fields.insert("flag".to_string(), other);
                None
            }
            None => None,
        };

        Some(Country {
            name,
            region,
            flag,
            extra: fields,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn flag(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// Pass-through field lookup.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Simple aggregate statistics for a loaded directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub countries: usize,
    pub regions: usize,
    /// Records discarded by validation.
    pub dropped: usize,
}

/// The validated country list, in API order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Directory {
    countries: Vec<Country>,
    #[serde(skip)]
    dropped: usize,
}

impl Directory {
    /// Run every raw record through [`Country::from_value`], keeping the valid
    /// ones in their original order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut countries = Vec::new();
        let mut dropped = 0;
        for record in records {
            match Country::from_value(record) {
                Some(country) => countries.push(country),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            tracing::debug!(dropped, kept = countries.len(), "discarded malformed country records");
        }
        Directory { countries, dropped }
    }

    pub fn from_envelope(envelope: ListEnvelope) -> Self {
        Self::from_records(envelope.data.unwrap_or_default())
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn into_countries(self) -> Vec<Country> {
        self.countries
    }

    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats {
            countries: self.countries.len(),
            regions: crate::group::group(&self.countries).len(),
            dropped: self.dropped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_valid_records_and_trims_region() {
        let c = Country::from_value(json!({
            "name": "Zambia",
            "region": "  Africa ",
            "flag": "https://flagcdn.com/zm.svg",
            "capital": "Lusaka"
        }))
        .unwrap();
        assert_eq!(c.name(), "Zambia");
        assert_eq!(c.region(), "Africa");
        assert_eq!(c.flag(), Some("https://flagcdn.com/zm.svg"));
        assert_eq!(c.field("capital"), Some(&json!("Lusaka")));
        assert!(c.field("name").is_none());
    }

    #[test]
    fn rejects_missing_or_non_string_name() {
        assert!(Country::from_value(json!({ "region": "Europe" })).is_none());
        assert!(Country::from_value(json!({ "name": "", "region": "Europe" })).is_none());
        assert!(Country::from_value(json!({ "name": { "common": "France" }, "region": "Europe" })).is_none());
        assert!(Country::from_value(json!({ "name": 42, "region": "Europe" })).is_none());
    }

    #[test]
    fn rejects_missing_or_blank_region() {
        assert!(Country::from_value(json!({ "name": "France" })).is_none());
        assert!(Country::from_value(json!({ "name": "France", "region": null })).is_none());
        assert!(Country::from_value(json!({ "name": "France", "region": "   " })).is_none());
    }

    #[test]
    fn rejects_non_objects() {
        assert!(Country::from_value(json!("France")).is_none());
        assert!(Country::from_value(Value::Null).is_none());
    }

    #[test]
    fn non_string_flag_stays_in_pass_through() {
        let c = Country::from_value(json!({ "name": "X", "region": "Y", "flag": { "svg": "x.svg" } })).unwrap();
        assert_eq!(c.flag(), None);
        assert_eq!(c.field("flag"), Some(&json!({ "svg": "x.svg" })));
    }

    #[test]
    fn directory_counts_dropped_records() {
        let dir = Directory::from_records(vec![
            json!({ "name": "Aland", "region": "Europe" }),
            json!({ "name": "Broken" }),
            json!(null),
            json!({ "name": "Zambia", "region": "Africa" }),
        ]);
        assert_eq!(
            dir.stats(),
            DirectoryStats {
                countries: 2,
                regions: 2,
                dropped: 2
            }
        );
        let names: Vec<_> = dir.countries().iter().map(Country::name).collect();
        assert_eq!(names, ["Aland", "Zambia"]);
    }

    #[test]
    fn envelope_without_data_is_empty() {
        let env: ListEnvelope = serde_json::from_str("{}").unwrap();
        assert!(Directory::from_envelope(env).countries().is_empty());
        let env: ListEnvelope = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(Directory::from_envelope(env).countries().is_empty());
    }

    #[test]
    fn serializes_pass_through_fields_flat() {
        let c = Country::from_value(json!({ "name": "Aland", "region": "Europe", "population": 30000 })).unwrap();
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v, json!({ "name": "Aland", "region": "Europe", "population": 30000 }));
    }
}
