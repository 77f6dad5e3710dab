// src/specs/search.rs
//! Search results → one detail-page URL.
//!
//! The query carries the title only; the year is used afterwards to pick between
//! candidates.

use scraper::{ ElementRef, Html };

use crate::config::{ consts::{ SEARCH_PARAMS, SEARCH_PATH }, NetOptions };
use crate::core::html::{ first_text, select_all, select_first, text_of };
use crate::core::net::{ build_url, resolve_href };
use crate::core::sanitize::{ first_year, year_in_parens };
use crate::core::Fetch;
use crate::data::{ Candidate, MovieRecord };
use crate::error::FetchError;

// Current layout: one <li> per result.
const ITEM_SEL: &str = "li.find-result-item, li.ipc-metadata-list-summary-item";
const ITEM_LINK_SEL: &str =
    r#"a.ipc-metadata-list-summary-item__t, a.ipc-title-link-wrapper, a[href*="/title/"]"#;
const ITEM_YEAR_SEL: &str = ".ipc-metadata-list-summary-item__tl li, .cli-title-metadata-item";

// Legacy layout: a results table with `td.result_text` cells.
const LEGACY_CELL_SEL: &str = "td.result_text";

/// Why a candidate was picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    ExactYear,
    FirstResult,
}

impl Selection {
    pub fn describe(self) -> &'static str {
        match self {
            Selection::ExactYear => "exact year match",
            Selection::FirstResult => "no year match, falling back to first result",
        }
    }
}

/// Search page URL for `title`.
pub fn search_url(net: &NetOptions, title: &str) -> Result<String, FetchError> {
    let mut params = vec![("q", title)];
    params.extend_from_slice(SEARCH_PARAMS);
    build_url(net.site_root(), SEARCH_PATH, &params)
}

/// Parse a results page into candidates, in listing order.
pub fn parse_candidates(doc: &str, site: &str) -> Vec<Candidate> {
    let html = Html::parse_document(doc);
    let root = html.root_element();

    let current: Vec<Candidate> = select_all(root, ITEM_SEL)
        .into_iter()
        .filter_map(|item| candidate_from_item(item, site))
        .collect();
    if !current.is_empty() {
        return current;
    }

    logd!("No current-layout results; trying legacy result table");
    select_all(root, LEGACY_CELL_SEL)
        .into_iter()
        .filter_map(|cell| candidate_from_legacy_cell(cell, site))
        .collect()
}

fn candidate_from_item(item: ElementRef<'_>, site: &str) -> Option<Candidate> {
    let link = select_first(item, ITEM_LINK_SEL)?;
    let url = resolve_href(site, link.value().attr("href")?)?;
    let year = first_text(item, ITEM_YEAR_SEL).and_then(|t| first_year(&t));
    Some(Candidate { title: text_of(link), year, url })
}

/// `<td class="result_text"><a href="/title/tt…/">Title</a> (2009)</td>`
fn candidate_from_legacy_cell(cell: ElementRef<'_>, site: &str) -> Option<Candidate> {
    let link = select_first(cell, "a[href]")?;
    let url = resolve_href(site, link.value().attr("href")?)?;
    let year = year_in_parens(&text_of(cell));
    Some(Candidate { title: text_of(link), year, url })
}

/// First candidate with exactly `year`, else the first candidate, else `None`.
pub fn select<'a>(candidates: &'a [Candidate], year: &str) -> Option<(&'a Candidate, Selection)> {
    if let Some(c) = candidates.iter().find(|c| c.year.as_deref() == Some(year)) {
        return Some((c, Selection::ExactYear));
    }
    candidates.first().map(|c| (c, Selection::FirstResult))
}

/// Search for `record` and pick a detail-page URL.
/// Request failures are logged and count as "not found".
pub fn resolve(fetch: &dyn Fetch, net: &NetOptions, record: &MovieRecord) -> Option<String> {
    let (title, year) = (record.title(), record.year());

    let url = match search_url(net, title) {
        Ok(u) => u,
        Err(e) => {
            loge!("Search URL for '{title}' ({year}): {e}");
            return None;
        }
    };
    logd!("Searching for '{title}': {url}");

    let body = match fetch.get(&url) {
        Ok(b) => b,
        Err(e) => {
            loge!("Search failed for '{title}' ({year}): {e}");
            return None;
        }
    };

    let candidates = parse_candidates(&body, net.site_root());
    logd!("{} results for '{title}' ({year})", candidates.len());
    for (i, c) in candidates.iter().enumerate() {
        logd!("  #{i}: {} ({}) {}", c.title, c.year.as_deref().unwrap_or("?"), c.url);
    }

    match select(&candidates, year) {
        Some((c, why)) => {
            logd!("Picked '{}' {}: {}", c.title, c.url, why.describe());
            Some(c.url.clone())
        }
        None => {
            logd!("No results for '{title}' ({year})");
            None
        }
    }
}
