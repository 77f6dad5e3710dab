// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::error::Error;

/// Everything a run needs, built once at startup and passed by reference.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Pause between records.
    pub delay: Duration,
    pub net: NetOptions,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            delay: secs(DELAY_SECS),
            net: NetOptions::default(),
        }
    }

    pub fn with_delay_secs(mut self, secs_f: f64) -> Result<Self, Error> {
        self.delay = duration_from_secs("delay", secs_f)?;
        Ok(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetOptions {
    /// Scheme + host, no trailing slash (e.g. `https://www.imdb.com`).
    pub site: String,
    /// `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// Extra attempts after the first failed one.
    pub retries: u32,
    pub user_agent: String,
    pub accept_language: String,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            site: s!(SITE),
            timeout: Some(secs(TIMEOUT_SECS)),
            retries: RETRIES,
            user_agent: s!(USER_AGENT),
            accept_language: s!(ACCEPT_LANGUAGE),
        }
    }
}

impl NetOptions {
    /// Site root with any trailing '/' removed.
    pub fn site_root(&self) -> &str {
        self.site.trim_end_matches('/')
    }

    /// Sent as `Referer`, the way a browser arriving from the home page would.
    pub fn referer(&self) -> String {
        join!(self.site_root(), "/")
    }

    /// `0` disables the timeout.
    pub fn set_timeout_secs(&mut self, secs_f: f64) -> Result<(), Error> {
        let d = duration_from_secs("timeout", secs_f)?;
        self.timeout = if d.is_zero() { None } else { Some(d) };
        Ok(())
    }
}

fn secs(v: f64) -> Duration {
    Duration::from_secs_f64(v)
}

/// Accepts finite, non-negative seconds.
pub fn duration_from_secs(name: &str, v: f64) -> Result<Duration, Error> {
    if !v.is_finite() || v < 0.0 {
        return Err(Error::InvalidOption(format!("{name} must be a non-negative number of seconds, got {v}")));
    }
    Ok(secs(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_consts() {
        let o = RunOptions::new("in.md", "out.md");
        assert_eq!(o.delay, Duration::from_millis(1500));
        assert_eq!(o.net.timeout, Some(Duration::from_secs(30)));
        assert_eq!(o.net.retries, 0);
        assert_eq!(o.net.referer(), "https://www.imdb.com/");
    }

    #[test]
    fn negative_delay_is_rejected() {
        let err = RunOptions::new("a", "b").with_delay_secs(-1.0).unwrap_err();
        assert!(err.to_string().contains("delay"));
        assert!(RunOptions::new("a", "b").with_delay_secs(f64::NAN).is_err());
    }

    #[test]
    fn zero_timeout_disables_it() {
        let mut net = NetOptions::default();
        net.set_timeout_secs(0.0).unwrap();
        assert_eq!(net.timeout, None);
        net.set_timeout_secs(2.5).unwrap();
        assert_eq!(net.timeout, Some(Duration::from_millis(2500)));
    }

    #[test]
    fn site_root_drops_trailing_slash() {
        let net = NetOptions { site: s!("http://127.0.0.1:8080/"), ..NetOptions::default() };
        assert_eq!(net.site_root(), "http://127.0.0.1:8080");
        assert_eq!(net.referer(), "http://127.0.0.1:8080/");
    }
}
