// src/bin/cli.rs
use blurb_scrape::cli::{ self, Args };
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let summary = cli::run(Args::parse())?;
    println!(
        "\nDone! Wrote {} entries to {} ({} matched, {} described).",
        summary.records,
        summary.path.display(),
        summary.resolved,
        summary.described,
    );
    Ok(())
}
