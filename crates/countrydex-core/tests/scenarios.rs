// End-to-end runs of the home page state machine over realistic payloads.

use countrydex_core::prelude::*;
use countrydex_core::state::FETCH_FAILED_MESSAGE;
use serde_json::{json, Value};

fn payload() -> Value {
    json!({
        "data": [
            { "name": "Aland", "region": "Europe", "flag": "https://flagcdn.com/ax.svg" },
            { "name": "Albania", "region": "Europe ", "flag": "https://flagcdn.com/al.svg" },
            { "name": "Zambia", "region": "Africa", "flag": "https://flagcdn.com/zm.svg" },
            { "name": "Antarctica" },
            { "name": "", "region": "Europe" },
            { "name": "Albania", "region": "Europe", "flag": "duplicate" }
        ]
    })
}

fn loaded() -> DirectoryState {
    let directory = Directory::from_payload(payload()).unwrap();
    DirectoryState::default().reduce(Action::Loaded(directory.into_countries()))
}

fn shown(state: &DirectoryState) -> Vec<String> {
    state
        .view()
        .sections
        .iter()
        .flat_map(|s| s.countries.iter().map(|c| c.name().to_string()))
        .collect()
}

#[test]
fn malformed_records_never_reach_the_view() {
    let directory = Directory::from_payload(payload()).unwrap();
    assert_eq!(directory.stats().dropped, 2);
    assert_eq!(directory.regions(), ["All", "Africa", "Europe"]);
}

#[test]
fn query_al_across_all_regions() {
    let state = loaded().reduce(Action::SetQuery("al".into()));
    assert_eq!(shown(&state), ["Aland", "Albania"]);
    let view = state.view();
    assert_eq!(view.sections.len(), 1);
    assert_eq!(view.sections[0].region, "Europe");
    // The duplicate "Albania" record is shown once, with the first flag.
    assert_eq!(
        view.sections[0].countries[1].flag(),
        Some("https://flagcdn.com/al.svg")
    );
}

#[test]
fn region_africa_without_query() {
    let state = loaded().reduce(Action::SetRegion("Africa".into()));
    assert_eq!(shown(&state), ["Zambia"]);
    let pager = state.view().pager;
    assert!(!pager.has_prev);
    assert!(!pager.has_next);
}

#[test]
fn fetch_failure_on_first_load() {
    let state = DirectoryState::default().reduce(Action::LoadFailed);
    let view = state.view();
    assert!(state.countries().is_empty());
    assert_eq!(view.notice.map(|n| n.message()), Some(FETCH_FAILED_MESSAGE));
    assert!(view.sections.is_empty());
}

#[test]
fn paging_through_a_large_list_visits_every_country_once() {
    let records: Vec<Value> = (0..50)
        .map(|i| {
            let region = ["Africa", "Americas", "Asia", "Europe", "Oceania"][i % 5];
            json!({ "name": format!("Country {i:02}"), "region": region })
        })
        .collect();
    let mut state =
        DirectoryState::default().reduce(Action::Loaded(Directory::from_records(records).into_countries()));

    let mut seen = Vec::new();
    loop {
        seen.extend(shown(&state));
        if !state.pager().has_next {
            break;
        }
        state = state.reduce(Action::NextPage);
    }
    assert_eq!(state.page(), 5);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 50);
}
