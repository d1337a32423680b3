//! countrydex-wasm — WebAssembly bindings for countrydex-core
//!
//! The browser page keeps doing what browsers are good at (HTTP, timers,
//! DOM) and hands every event to a [`CountryDirectory`], which owns the
//! immutable directory state and answers with plain JSON-compatible objects
//! ready for rendering.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CountryDirectory, countryDetails } from 'countrydex-wasm';
//!
//! await init();
//! const dir = new CountryDirectory();
//! try {
//!   const res = await fetch('https://countries-api-abhishek.vercel.app/countries');
//!   dir.load(await res.json());
//! } catch (e) {
//!   dir.loadFailed(String(e));
//! }
//!
//! dir.setQuery('al');
//! render(dir.view()); // { regions, sections, pager, notice, carousel, ... }
//!
//! const timer = setInterval(() => showFlag(dir.tickCarousel()), 3000);
//! // on teardown: clearInterval(timer)
//! ```
//!
//! Notes
//! -----
//! - Every mutating call replaces the internal snapshot; `view()` is always
//!   derived from the latest one.
//! - Objects are serialized JSON-compatible (plain objects, not `Map`s).
use countrydex_core::prelude::*;
use std::result::Result;
use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log("Initializing countrydex WASM module...");
}

fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(JsValue::from)
}

/* --------------------------------------------------------------------------
   Home page state
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct CountryDirectory {
    state: DirectoryState,
}

impl CountryDirectory {
    fn apply(&mut self, action: Action) {
        self.state = self.state.reduce(action);
    }
}

impl Default for CountryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CountryDirectory {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CountryDirectory {
        CountryDirectory {
            state: DirectoryState::default(),
        }
    }

    /// Feed the parsed body of `GET /countries`. A payload of the wrong shape
    /// counts as a failed load.
    pub fn load(&mut self, payload: JsValue) {
        let parsed = serde_wasm_bindgen::from_value::<Value>(payload)
            .map_err(|e| e.to_string())
            .and_then(|v| Directory::from_payload(v).map_err(|e| e.to_string()));
        match parsed {
            Ok(directory) => {
                let stats = directory.stats();
                log(&format!(
                    "✓ Loaded {} countries in {} regions ({} dropped)",
                    stats.countries, stats.regions, stats.dropped
                ));
                self.apply(Action::Loaded(directory.into_countries()));
            }
            Err(reason) => self.load_failed(&reason),
        }
    }

    /// Report a failed list fetch. The current list is kept.
    #[wasm_bindgen(js_name = loadFailed)]
    pub fn load_failed(&mut self, reason: &str) {
        web_sys::console::error_1(&format!("Fetch Error: {reason}").into());
        self.apply(Action::LoadFailed);
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, query: String) {
        self.apply(Action::SetQuery(query));
    }

    #[wasm_bindgen(js_name = setRegion)]
    pub fn set_region(&mut self, region: String) {
        self.apply(Action::SetRegion(region));
    }

    /// Accent-insensitive name matching on or off.
    #[wasm_bindgen(js_name = setFolded)]
    pub fn set_folded(&mut self, folded: bool) {
        let mode = if folded {
            MatchMode::Folded
        } else {
            MatchMode::Lowercase
        };
        self.apply(Action::SetMatchMode(mode));
    }

    pub fn search(&mut self) {
        self.apply(Action::Search);
    }

    #[wasm_bindgen(js_name = setPage)]
    pub fn set_page(&mut self, page: usize) {
        self.apply(Action::SetPage(page));
    }

    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&mut self) {
        self.apply(Action::NextPage);
    }

    #[wasm_bindgen(js_name = prevPage)]
    pub fn prev_page(&mut self) {
        self.apply(Action::PrevPage);
    }

    /// The whole rendered page for the current snapshot.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.view())
    }

    pub fn regions(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.countries().regions())
    }

    /// Advance the flag carousel one step and return the country under it
    /// (`undefined` while the list is empty).
    #[wasm_bindgen(js_name = tickCarousel)]
    pub fn tick_carousel(&mut self) -> Result<JsValue, JsValue> {
        self.apply(Action::TickCarousel);
        self.carousel_item()
    }

    #[wasm_bindgen(js_name = carouselItem)]
    pub fn carousel_item(&self) -> Result<JsValue, JsValue> {
        match self.state.carousel().current(self.state.countries()) {
            Some(country) => to_js(country),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Detail view of an already loaded country, without a network call.
    #[wasm_bindgen(js_name = findCountry)]
    pub fn find_country(&self, name: &str) -> Result<JsValue, JsValue> {
        let details = self
            .state
            .countries()
            .find(name)
            .map(CountryDetails::from_country);
        to_js(&DetailState::from_fetch::<String>(Ok(details)))
    }
}

/* --------------------------------------------------------------------------
   Detail page
-------------------------------------------------------------------------- */

/// Turn the parsed body of `GET /countries/<name>` into a detail state:
/// `{ status: "loaded", value: {...} }` or `{ status: "failed", value: "..." }`.
/// Pass `null` when the request itself failed.
#[wasm_bindgen(js_name = countryDetails)]
pub fn country_details(payload: JsValue) -> Result<JsValue, JsValue> {
    let outcome = serde_wasm_bindgen::from_value::<Value>(payload)
        .map(|body| body.get("data").and_then(CountryDetails::from_value))
        .map_err(|e| e.to_string());
    to_js(&DetailState::from_fetch(outcome))
}

/// The view of a page that is still loading its detail record.
#[wasm_bindgen(js_name = detailLoading)]
pub fn detail_loading() -> Result<JsValue, JsValue> {
    to_js(&DetailState::Loading)
}
