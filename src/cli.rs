// src/cli.rs
use std::path::PathBuf;

use clap::{ ArgAction, Parser };

use crate::config::{ consts::{ DELAY_SECS, RETRIES, SITE, TIMEOUT_SECS }, RunOptions };
use crate::error::Error;
use crate::progress::LogProgress;
use crate::runner::{ self, RunSummary };

/// Enrich a Markdown movie table with IMDb plot descriptions.
#[derive(Parser, Debug, Clone)]
#[command(name = "blurb_scrape", version, about)]
pub struct Args {
    /// Input table (`| Title | Year |` rows)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output table with an added Description column
    #[arg(short, long)]
    pub output: PathBuf,

    /// Seconds to wait between records
    #[arg(short, long, default_value_t = DELAY_SECS)]
    pub delay: f64,

    /// Per-request timeout in seconds (0 = none)
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: f64,

    /// Extra attempts for a failed request
    #[arg(long, default_value_t = RETRIES)]
    pub retries: u32,

    /// Site root to query
    #[arg(long, default_value = SITE)]
    pub site: String,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn into_options(self) -> Result<RunOptions, Error> {
        let mut opts = RunOptions::new(self.input, self.output).with_delay_secs(self.delay)?;
        opts.net.set_timeout_secs(self.timeout)?;
        opts.net.retries = self.retries;
        opts.net.site = self.site;
        Ok(opts)
    }
}

pub fn run(args: Args) -> Result<RunSummary, Error> {
    crate::log::init(args.verbose);
    let opts = args.into_options()?;
    let mut progress = LogProgress::new();
    runner::run(&opts, Some(&mut progress))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["blurb_scrape", "-i", "in.md", "-o", "out.md"]).unwrap();
        let opts = args.into_options().unwrap();
        assert_eq!(opts.input, PathBuf::from("in.md"));
        assert_eq!(opts.delay, Duration::from_millis(1500));
        assert_eq!(opts.net.site, SITE);
    }

    #[test]
    fn knobs() {
        let args = Args::try_parse_from([
            "blurb_scrape", "--input", "a", "--output", "b",
            "-d", "0", "--timeout", "0", "--retries", "2", "--site", "http://localhost:9", "-vv",
        ]).unwrap();
        assert_eq!(args.verbose, 2);
        let opts = args.into_options().unwrap();
        assert!(opts.delay.is_zero());
        assert_eq!(opts.net.timeout, None);
        assert_eq!(opts.net.retries, 2);
        assert_eq!(opts.net.site, "http://localhost:9");
    }

    #[test]
    fn input_and_output_are_required() {
        assert!(Args::try_parse_from(["blurb_scrape", "-i", "a"]).is_err());
    }

    #[test]
    fn negative_delay_is_an_error() {
        let args = Args::try_parse_from(["blurb_scrape", "-i", "a", "-o", "b", "--delay=-2"]).unwrap();
        assert!(args.into_options().is_err());
    }
}
