// src/core/net.rs
// Blocking HTTP GET with a browser-like header set.

use std::{ thread, time::Duration };

use reqwest::blocking::Client;
use reqwest::header::{ HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT };
use reqwest::Url;

use crate::config::NetOptions;
use crate::error::FetchError;

const RETRY_PAUSE: Duration = Duration::from_millis(500);

/// One page body per URL. The runner only ever talks to the network through this,
/// so tests can hand it canned pages.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Single-attempt client; wrap it in [`Retry`] for retries.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(net: &NetOptions) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(&net.user_agent)?);
        headers.insert(ACCEPT_LANGUAGE, header_value(&net.accept_language)?);
        headers.insert(REFERER, header_value(&net.referer())?);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );

        // `None` means no timeout; blocking reqwest would otherwise default to 30s.
        let client = Client::builder()
            .default_headers(headers)
            .timeout(net.timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send().map_err(|e| transport(url, e))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(|e| transport(url, e))
    }
}

/// Re-issues failed requests up to `retries` extra times, pausing between attempts.
pub struct Retry<F> {
    inner: F,
    retries: u32,
    pause: Duration,
}

impl<F: Fetch> Retry<F> {
    pub fn new(inner: F, retries: u32) -> Self {
        Self { inner, retries, pause: RETRY_PAUSE }
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn inner(&self) -> &F { &self.inner }
}

impl<F: Fetch> Fetch for Retry<F> {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let mut attempt = 0u32;
        loop {
            match self.inner.get(url) {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retries && is_retryable(&e) => {
                    attempt += 1;
                    logw!("{e}; retry {attempt}/{}", self.retries);
                    if !self.pause.is_zero() {
                        thread::sleep(self.pause);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Client errors (4xx) won't change on a second try.
fn is_retryable(e: &FetchError) -> bool {
    match e {
        FetchError::Status { status, .. } => *status >= 500 || *status == 429,
        FetchError::Transport { .. } => true,
        FetchError::Client(_) | FetchError::InvalidUrl(_) => false,
    }
}

fn transport(url: &str, e: reqwest::Error) -> FetchError {
    FetchError::Transport { url: s!(url), message: e.to_string() }
}

fn header_value(v: &str) -> Result<HeaderValue, FetchError> {
    HeaderValue::from_str(v).map_err(|e| FetchError::Client(format!("bad header value {v:?}: {e}")))
}

/// `site` + `path` with percent-encoded query parameters.
pub fn build_url(site: &str, path: &str, params: &[(&str, &str)]) -> Result<String, FetchError> {
    let base = join!(site.trim_end_matches('/'), path);
    Url::parse_with_params(&base, params)
        .map(String::from)
        .map_err(|e| FetchError::InvalidUrl(format!("{base}: {e}")))
}

/// Resolve a (possibly relative) link against the site root, dropping query and fragment.
///
/// `/title/tt1161418/?ref_=fn_al_tt_1` → `https://www.imdb.com/title/tt1161418/`
pub fn resolve_href(site: &str, href: &str) -> Option<String> {
    let href = href.trim();
    let path = href.split(['?', '#']).next().unwrap_or_default();
    if path.is_empty() {
        return None;
    }
    let base = Url::parse(&join!(site.trim_end_matches('/'), "/")).ok()?;
    base.join(path).ok().map(String::from)
}
