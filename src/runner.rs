// src/runner.rs
use std::path::PathBuf;
use std::thread;

use crate::{
    config::{ consts::{ HEADERS, PLACEHOLDER }, RunOptions },
    core::{ Fetch, HttpClient, Retry },
    data::{ EnrichedRecord, MovieRecord },
    error::Error,
    file, progress::Progress, specs, table,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows parsed from the input (= rows written).
    pub records: usize,
    /// Records whose search picked a detail page.
    pub resolved: usize,
    /// Records that got a real description rather than the placeholder.
    pub described: usize,
    pub path: PathBuf,
}

/// Top-level runner over the live site.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(opts: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary, Error> {
    // Input problems abort before a client (or any request) exists.
    let text = file::read_input(&opts.input)?;
    let client = Retry::new(HttpClient::new(&opts.net)?, opts.net.retries);
    finish_run(&client, opts, &text, progress)
}

/// Same as [`run`], with the transport supplied by the caller.
pub fn run_with(
    fetch: &dyn Fetch,
    opts: &RunOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Error> {
    let text = file::read_input(&opts.input)?;
    finish_run(fetch, opts, &text, progress)
}

fn finish_run(
    fetch: &dyn Fetch,
    opts: &RunOptions,
    text: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Error> {
    let records = table::parse_records(text);
    let (rows, resolved) = enrich(fetch, opts, records, progress.as_mut().map(|p| &mut **p as &mut dyn Progress));

    let written = file::write_output(&opts.output, &table::render_table(HEADERS, &rows));

    if let Some(p) = progress.as_deref_mut() {
        if let Ok(path) = &written {
            p.log(&format!("Wrote {} entries to {}.", rows.len(), path.display()));
        }
        p.finish();
    }

    Ok(RunSummary {
        records: rows.len(),
        resolved,
        described: rows.iter().filter(|r| r.description != PLACEHOLDER).count(),
        path: written?,
    })
}

/// Resolve and describe every record, in order, pausing `opts.delay` between records.
/// Returns the enriched rows and how many records resolved to a detail page.
pub fn enrich(
    fetch: &dyn Fetch,
    opts: &RunOptions,
    records: Vec<MovieRecord>,
    mut progress: Option<&mut dyn Progress>,
) -> (Vec<EnrichedRecord>, usize) {
    let total = records.len();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let mut out = Vec::with_capacity(total);
    let mut resolved = 0usize;

    for (i, record) in records.into_iter().enumerate() {
        let idx = i + 1;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("[{idx}/{total}] Processing '{}' ({})...", record.title(), record.year()));
        }

        let description = match specs::search::resolve(fetch, &opts.net, &record) {
            Some(url) => {
                resolved += 1;
                let text = specs::title::describe(fetch, &url);
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("  {url} -> {} chars", text.chars().count()));
                }
                text
            }
            None => {
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("  No match for '{}'; using placeholder.", record.title()));
                }
                s!(PLACEHOLDER)
            }
        };

        let row = EnrichedRecord::new(record, description);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(idx, &row);
        }
        out.push(row);

        // One pause per record, none after the last.
        if idx < total && !opts.delay.is_zero() {
            thread::sleep(opts.delay);
        }
    }

    (out, resolved)
}
