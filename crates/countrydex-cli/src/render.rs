// Plain-text rendering of the directory views.
use countrydex_core::details::DetailState;
use countrydex_core::model::Country;
use countrydex_core::state::{DirectoryView, LoadStatus};
use std::fmt::Write;

pub fn flag(country: &Country) -> String {
    match country.flag() {
        Some(url) => format!("{}  {}", country.name(), url),
        None => country.name().to_string(),
    }
}

pub fn directory(view: &DirectoryView<'_>) -> String {
    let mut out = String::new();

    if let Some(featured) = view.carousel {
        let _ = writeln!(out, "Featured: {}", flag(featured));
        out.push('\n');
    }

    if let Some(notice) = view.notice {
        let _ = writeln!(out, "{}", notice.message());
    }
    if view.status == LoadStatus::Failed {
        return out;
    }

    let _ = writeln!(out, "Regions: {}", view.regions.join(" | "));
    let _ = writeln!(
        out,
        "Showing region {} for query {:?}",
        view.region, view.query
    );

    for section in &view.sections {
        out.push('\n');
        let _ = writeln!(out, "{}", section.region);
        for country in &section.countries {
            let _ = writeln!(out, "  {}", flag(country));
        }
    }

    let pager = view.pager;
    out.push('\n');
    let _ = writeln!(
        out,
        "Page {} of {} ({} countries)  [{}] [{}]",
        pager.page,
        pager.total_pages.max(1),
        pager.total_items,
        if pager.has_prev { "Previous" } else { "-" },
        if pager.has_next { "Next" } else { "-" },
    );
    out
}

pub fn detail(state: &DetailState) -> String {
    match state {
        DetailState::Loaded(details) => format!("{details}\n"),
        other => format!("{}\n", other.message().unwrap_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countrydex_core::prelude::*;
    use serde_json::json;

    fn state() -> DirectoryState {
        let directory = Directory::from_records(vec![
            json!({ "name": "Aland", "region": "Europe", "flag": "ax.svg" }),
            json!({ "name": "Zambia", "region": "Africa" }),
        ]);
        DirectoryState::default().reduce(Action::Loaded(directory.into_countries()))
    }

    #[test]
    fn renders_sections_and_pager() {
        let text = directory(&state().view());
        assert!(text.contains("Featured: Aland  ax.svg"));
        assert!(text.contains("Regions: All | Africa | Europe"));
        assert!(text.contains("Europe\n  Aland  ax.svg\n"));
        assert!(text.contains("Africa\n  Zambia\n"));
        assert!(text.contains("Page 1 of 1 (2 countries)  [-] [-]"));
    }

    #[test]
    fn renders_notice_on_failure_only() {
        let failed = DirectoryState::default().reduce(Action::LoadFailed);
        let text = directory(&failed.view());
        assert_eq!(text, "Failed to fetch countries. Please try again.\n");
    }
}
