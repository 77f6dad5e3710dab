// src/specs/title.rs
//! Title (detail) page → description.
//!
//! Two strategies, tried in order:
//! 1. [`FullSummary`]: the plot element the page renders at its widest breakpoint.
//! 2. [`MetaDescription`]: the `<meta name="description">` search snippet.
//!
//! When neither yields text, the caller gets [`PLACEHOLDER`].

use scraper::Html;

use crate::config::consts::PLACEHOLDER;
use crate::core::html::{ first_text, meta_content };
use crate::core::Fetch;

/// One way of reading a description out of a parsed title page.
pub trait DescriptionStrategy {
    fn name(&self) -> &'static str;
    fn extract(&self, doc: &Html) -> Option<String>;
}

/// Full plot summary. The page carries the same plot at several breakpoints;
/// the widest one is the longest.
pub struct FullSummary;

const PLOT_SELECTORS: &[&str] = &[
    r#"[data-testid="plot-xl"]"#,
    r#"[data-testid="plot-l"]"#,
    r#"[data-testid="plot-xs_to_m"]"#,
];

impl DescriptionStrategy for FullSummary {
    fn name(&self) -> &'static str { "full summary" }

    fn extract(&self, doc: &Html) -> Option<String> {
        PLOT_SELECTORS
            .iter()
            .find_map(|css| first_text(doc.root_element(), css))
    }
}

/// Short synopsis from the meta description, minus the trailing credits.
pub struct MetaDescription;

impl DescriptionStrategy for MetaDescription {
    fn name(&self) -> &'static str { "meta description" }

    fn extract(&self, doc: &Html) -> Option<String> {
        let content = meta_content(doc, "description")?;
        let synopsis = trim_credits(&content);
        (!synopsis.is_empty()).then_some(synopsis)
    }
}

/// `"Plot. Directed by X. With Y, Z."` → `"Plot."`
fn trim_credits(content: &str) -> String {
    let head = content.split(". Directed by").next().unwrap_or_default().trim();
    if head.is_empty() || head.ends_with(['.', '!', '?', '…']) {
        s!(head)
    } else {
        join!(head, ".")
    }
}

pub fn default_strategies() -> [&'static dyn DescriptionStrategy; 2] {
    [&FullSummary, &MetaDescription]
}

/// First strategy with a result, with its name.
pub fn extract_description(
    doc: &str,
    strategies: &[&dyn DescriptionStrategy],
) -> Option<(&'static str, String)> {
    let html = Html::parse_document(doc);
    strategies
        .iter()
        .find_map(|s| s.extract(&html).map(|text| (s.name(), text)))
}

/// Fetch `url` and return its description, or the placeholder.
pub fn describe(fetch: &dyn Fetch, url: &str) -> String {
    let body = match fetch.get(url) {
        Ok(b) => b,
        Err(e) => {
            loge!("Title page request failed: {e}");
            return s!(PLACEHOLDER);
        }
    };

    match extract_description(&body, &default_strategies()) {
        Some((via, text)) => {
            logd!("Description via {via} ({} chars)", text.chars().count());
            text
        }
        None => {
            logw!("No description found on {url}");
            s!(PLACEHOLDER)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: &str = r#"<html><head>
        <meta name="description" content="Short blurb. Directed by Jared Hess. With Michael Angarano.">
        </head><body>
        <span data-testid="plot-xs_to_m">Small plot</span>
        <span data-testid="plot-xl">A teenager attends a writers' camp.</span>
        </body></html>"#;

    #[test]
    fn full_summary_wins() {
        let got = extract_description(BOTH, &default_strategies()).unwrap();
        assert_eq!(got, ("full summary", s!("A teenager attends a writers' camp.")));
    }

    #[test]
    fn narrower_plot_when_xl_missing() {
        let doc = r#"<p data-testid="plot-l"> Mid plot </p>"#;
        assert_eq!(FullSummary.extract(&Html::parse_document(doc)).as_deref(), Some("Mid plot"));
    }

    #[test]
    fn empty_plot_falls_through_to_meta() {
        let doc = r#"<head><meta name="description" content="Snippet."></head>
            <span data-testid="plot-xl">   </span>"#;
        let got = extract_description(doc, &default_strategies()).unwrap();
        assert_eq!(got, ("meta description", s!("Snippet.")));
    }

    #[test]
    fn meta_loses_credits() {
        assert_eq!(trim_credits("Short blurb. Directed by Jared Hess. With X."), "Short blurb.");
        assert_eq!(trim_credits("No full stop"), "No full stop.");
        assert_eq!(trim_credits("Really?"), "Really?");
    }

    #[test]
    fn nothing_found() {
        assert_eq!(extract_description("<html><body></body></html>", &default_strategies()), None);
    }
}
