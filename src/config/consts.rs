// src/config/consts.rs

// Net config
pub const SITE: &str = "https://www.imdb.com";
pub const SEARCH_PATH: &str = "/find/";
pub const SEARCH_PARAMS: &[(&str, &str)] = &[("s", "tt"), ("ttype", "ft"), ("ref_", "nv_sr_sm")];
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/102.0.0.0 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";
pub const TIMEOUT_SECS: f64 = 30.0;
pub const RETRIES: u32 = 0;

// Run
pub const DELAY_SECS: f64 = 1.5; // be polite

// Output
pub const PLACEHOLDER: &str = "Description not found.";
pub const HEADERS: &[&str] = &["Title", "Year", "Description"];
