// src/progress.rs
use crate::data::EnrichedRecord;

/// Lightweight progress reporting for a run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of parsed records.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one record is finished (1-based index).
    fn item_done(&mut self, _index: usize, _record: &EnrichedRecord) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Sink that forwards everything to the log.
pub struct LogProgress {
    total: usize,
}

impl LogProgress {
    pub fn new() -> Self { Self { total: 0 } }
}

impl Default for LogProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        logf!("Found {total} movie entries.");
    }
    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }
    fn item_done(&mut self, index: usize, record: &EnrichedRecord) {
        logd!("[{index}/{}] done: '{}' ({})", self.total, record.title(), record.year());
    }
}
