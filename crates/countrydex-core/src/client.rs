// crates/countrydex-core/src/client.rs

//! Blocking client for the countries REST API.
//!
//! Two calls, no retries:
//! - `GET <base>/countries` → `{ "data": [...] }`
//! - `GET <base>/countries/<name>` → `{ "data": { ... } }`

use crate::details::CountryDetails;
use crate::error::{DexError, Result};
use crate::model::{DetailEnvelope, Directory, ListEnvelope};
use reqwest::blocking::Client;
use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "https://countries-api-abhishek.vercel.app";

/// Where the API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| DexError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(DexError::InvalidUrl(config.base_url.clone()));
        }
        let http = Client::builder()
            .user_agent(concat!("countrydex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(ApiClient { base, http })
    }

    /// Fetch and validate the full country list.
    pub fn fetch_countries(&self) -> Result<Directory> {
        let url = self.endpoint(&[])?;
        tracing::debug!(%url, "fetching country list");
        let envelope: ListEnvelope = self
            .http
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .inspect_err(|e| tracing::warn!(error = %e, "country list fetch failed"))?;
        let directory = Directory::from_envelope(envelope);
        tracing::info!(countries = directory.countries().len(), "country list fetched");
        Ok(directory)
    }

    /// Fetch one country by name or code. `Ok(None)` when the API answers
    /// without a usable record.
    pub fn fetch_country(&self, name: &str) -> Result<Option<CountryDetails>> {
        let url = self.endpoint(&[name])?;
        tracing::debug!(%url, "fetching country detail");
        let envelope: DetailEnvelope = self
            .http
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .inspect_err(|e| tracing::warn!(error = %e, name, "country detail fetch failed"))?;
        Ok(envelope.data.as_ref().and_then(CountryDetails::from_value))
    }

    /// `<base>/countries[/<segment>...]`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| DexError::InvalidUrl(self.base.to_string()))?;
            path.pop_if_empty().push("countries");
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_encode_names() {
        let client = ApiClient::new(&ApiConfig::with_base_url("https://example.test/api/")).unwrap();
        assert_eq!(
            client.endpoint(&[]).unwrap().as_str(),
            "https://example.test/api/countries"
        );
        assert_eq!(
            client.endpoint(&["United States"]).unwrap().as_str(),
            "https://example.test/api/countries/United%20States"
        );
        assert_eq!(
            client.endpoint(&["a/b"]).unwrap().as_str(),
            "https://example.test/api/countries/a%2Fb"
        );
    }

    #[test]
    fn rejects_bad_base_urls() {
        assert!(matches!(
            ApiClient::new(&ApiConfig::with_base_url("not a url")),
            Err(DexError::InvalidUrl(_))
        ));
        assert!(matches!(
            ApiClient::new(&ApiConfig::with_base_url("mailto:someone@example.test")),
            Err(DexError::InvalidUrl(_))
        ));
    }

    #[test]
    fn default_points_at_public_api() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_BASE_URL);
    }
}
