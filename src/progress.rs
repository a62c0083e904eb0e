// src/progress.rs
use std::path::Path;

use crate::patch::Outcome;

/// Lightweight progress reporting for batch runs. Frontends implement
/// this to surface per-page status to users.
pub trait Progress {
    /// Called at the start with the number of pages in the batch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page has been processed, whatever the outcome.
    fn item_done(&mut self, _page: &Path, _outcome: &Outcome) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
