// tests/common/mod.rs
//
// Offline stand-in for the site: canned bodies keyed by URL substring,
// with every requested URL recorded.
#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use blurb_scrape::core::Fetch;
use blurb_scrape::FetchError;

pub const SITE: &str = "https://www.imdb.com";

#[derive(Default)]
pub struct StubSite {
    routes: Vec<(String, Result<String, u16>)>,
    pub requests: RefCell<Vec<String>>,
}

impl StubSite {
    pub fn new() -> Self { Self::default() }

    /// Serve `body` for any URL containing `needle`. First matching route wins.
    pub fn page(mut self, needle: &str, body: &str) -> Self {
        self.routes.push((needle.to_string(), Ok(body.to_string())));
        self
    }

    /// Answer any URL containing `needle` with an HTTP error status.
    pub fn status(mut self, needle: &str, status: u16) -> Self {
        self.routes.push((needle.to_string(), Err(status)));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn count_containing(&self, needle: &str) -> usize {
        self.requests.borrow().iter().filter(|u| u.contains(needle)).count()
    }
}

impl Fetch for StubSite {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.routes.iter().find(|(needle, _)| url.contains(needle.as_str())) {
            Some((_, Ok(body))) => Ok(body.clone()),
            Some((_, Err(status))) => Err(FetchError::Status { url: url.to_string(), status: *status }),
            None => Err(FetchError::Transport { url: url.to_string(), message: "connection refused".into() }),
        }
    }
}

/// Search results page in the current layout: (title, year, tt id).
pub fn results_page(items: &[(&str, Option<&str>, &str)]) -> String {
    let mut out = String::from("<html><body><ul>");
    for (title, year, id) in items {
        out.push_str(&format!(
            r#"<li class="ipc-metadata-list-summary-item find-result-item find-title-result">
                 <a class="ipc-metadata-list-summary-item__t" href="/title/{id}/?ref_=fn_al_tt_1">{title}</a>"#
        ));
        if let Some(y) = year {
            out.push_str(&format!(
                r#"<ul class="ipc-metadata-list-summary-item__tl"><li>{y}</li></ul>"#
            ));
        }
        out.push_str("</li>");
    }
    out.push_str("</ul></body></html>");
    out
}

/// Title page with an optional full plot and optional meta description.
pub fn title_page(plot: Option<&str>, meta: Option<&str>) -> String {
    let mut out = String::from("<html><head>");
    if let Some(m) = meta {
        out.push_str(&format!(r#"<meta name="description" content="{m}">"#));
    }
    out.push_str("</head><body>");
    if let Some(p) = plot {
        out.push_str(&format!(r#"<span data-testid="plot-xl">{p}</span>"#));
    }
    out.push_str("</body></html>");
    out
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("blurb_scrape_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}
