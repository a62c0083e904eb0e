// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::options::{PageSelector, PatchOptions, TaskKind},
    file::{read_document, resolve_page, write_document},
    patch::{Outcome, PatchResult},
    progress::Progress,
    specs,
};

/// Outcome of one page in a batch.
pub struct PageReport {
    pub page: PathBuf,
    pub outcome: Outcome,
}

/// Summary of what a run did.
pub struct RunSummary {
    pub reports: Vec<PageReport>,
    pub files_written: Vec<PathBuf>,
}

/// The page list for a run: the task's built-in list unless the caller
/// named files explicitly.
pub fn resolve_pages(opts: &PatchOptions) -> Vec<String> {
    match &opts.pages {
        PageSelector::Default => opts.task.default_pages().iter().map(|s| s!(*s)).collect(),
        PageSelector::Files(list) => list.clone(),
    }
}

/// Top-level batch driver: read, patch, write back, one page at a time.
/// Pages are disjoint and independent; a missing page is reported and the
/// rest of the batch carries on.
pub fn run(
    opts: &PatchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let pages = resolve_pages(opts);
    logd!("task {:?}: {} page(s) under {}", opts.task, pages.len(), opts.root.display());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages.len());
    }

    let mut reports = Vec::with_capacity(pages.len());
    let mut written = Vec::new();

    for name in &pages {
        let path = resolve_page(&opts.root, name);

        let Some(doc) = read_document(&path)? else {
            loge!("{}: not found", path.display());
            report(&mut progress, &mut reports, path, Outcome::Missing);
            continue;
        };

        let result = apply_task(opts.task, &doc, opts.min_len)?;

        if let PatchResult { text: Some(text), .. } = &result {
            if !opts.dry_run {
                write_document(&path, text)?;
                written.push(path.clone());
            }
        }

        logf!("{}: {}", path.display(), result.outcome.describe());
        report(&mut progress, &mut reports, path, result.outcome);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary { reports, files_written: written })
}

fn apply_task(task: TaskKind, doc: &str, min_len: usize) -> Result<PatchResult, Box<dyn Error>> {
    match task {
        TaskKind::Styles => specs::styles::apply(doc, min_len),
        TaskKind::ScrollTop => specs::scroll_top::apply(doc),
    }
}

fn report(
    progress: &mut Option<&mut dyn Progress>,
    reports: &mut Vec<PageReport>,
    page: PathBuf,
    outcome: Outcome,
) {
    if let Some(p) = progress.as_deref_mut() {
        p.item_done(&page, &outcome);
    }
    reports.push(PageReport { page, outcome });
}
