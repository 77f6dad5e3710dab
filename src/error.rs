// src/error.rs
use std::{ fmt, io, path::PathBuf };

/// Failures that end a run. Per-record misses never surface here.
#[derive(Debug)]
pub enum Error {
    /// Reading the input table failed.
    Input { path: PathBuf, source: io::Error },
    /// Writing the output table failed.
    Output { path: PathBuf, source: io::Error },
    /// The HTTP client could not be constructed.
    Fetch(FetchError),
    /// A run option was out of range.
    InvalidOption(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Input { path, source } =>
                write!(f, "could not read input file {}: {source}", path.display()),
            Error::Output { path, source } =>
                write!(f, "could not write output file {}: {source}", path.display()),
            Error::Fetch(e) => write!(f, "{e}"),
            Error::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Input { source, .. } | Error::Output { source, .. } => Some(source),
            Error::Fetch(e) => Some(e),
            Error::InvalidOption(_) => None,
        }
    }
}

impl From<FetchError> for Error {
    fn from(e: FetchError) -> Self {
        Error::Fetch(e)
    }
}

/// Errors surfaced by a single HTTP GET.
#[derive(Debug)]
pub enum FetchError {
    /// Building the client failed (TLS backend, bad header value, ...).
    Client(String),
    /// The URL could not be built or parsed.
    InvalidUrl(String),
    /// Server answered with a non-2xx status.
    Status { url: String, status: u16 },
    /// Connection, timeout or body read failure.
    Transport { url: String, message: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Client(msg) => write!(f, "HTTP client setup failed: {msg}"),
            FetchError::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
            FetchError::Status { url, status } => write!(f, "HTTP error: {status} {url}"),
            FetchError::Transport { url, message } => write!(f, "request to {url} failed: {message}"),
        }
    }
}

impl std::error::Error for FetchError {}
