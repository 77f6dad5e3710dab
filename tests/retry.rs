// tests/retry.rs
//
// Attempt counts for the retry wrapper, over the stub site.

mod common;

use std::time::Duration;

use blurb_scrape::core::{ Fetch, Retry };
use blurb_scrape::FetchError;
use common::StubSite;

const URL: &str = "https://www.imdb.com/title/tt1/";

fn retrying(site: StubSite, retries: u32) -> Retry<StubSite> {
    Retry::new(site, retries).with_pause(Duration::ZERO)
}

#[test]
fn server_errors_are_retried_up_to_the_limit() {
    let fetch = retrying(StubSite::new().status("/title/", 503), 2);
    let err = fetch.get(URL).unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 503, .. }));
    assert_eq!(fetch.inner().requested().len(), 3);
}

#[test]
fn transport_errors_are_retried() {
    let fetch = retrying(StubSite::new(), 1);
    assert!(matches!(fetch.get(URL), Err(FetchError::Transport { .. })));
    assert_eq!(fetch.inner().requested().len(), 2);
}

#[test]
fn client_errors_are_not_retried() {
    let fetch = retrying(StubSite::new().status("/title/", 404), 3);
    assert!(fetch.get(URL).is_err());
    assert_eq!(fetch.inner().requested().len(), 1);
}

#[test]
fn zero_retries_means_one_attempt() {
    let fetch = retrying(StubSite::new().status("/title/", 503), 0);
    assert!(fetch.get(URL).is_err());
    assert_eq!(fetch.inner().requested().len(), 1);
}

#[test]
fn success_is_returned_without_retrying() {
    let fetch = retrying(StubSite::new().page("/title/", "<html>ok</html>"), 2);
    assert_eq!(fetch.get(URL).unwrap(), "<html>ok</html>");
    assert_eq!(fetch.inner().requested().len(), 1);
}
