// src/config/options.rs
use std::path::PathBuf;

use super::consts::{DEFAULT_SITE_DIR, MIN_OUTPUT_CHARS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    /// Collapse duplicated <style> blocks.
    Styles,
    /// Inject the floating scroll-to-top button.
    ScrollTop,
}

impl TaskKind {
    /// The pages this task ships with. Overridable via `--pages`.
    pub fn default_pages(&self) -> &'static [&'static str] {
        match self {
            TaskKind::Styles => crate::specs::styles::PAGES,
            TaskKind::ScrollTop => crate::specs::scroll_top::PAGES,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageSelector {
    /// The task's built-in page list.
    Default,
    /// Explicit file names, resolved under the root dir.
    Files(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchOptions {
    pub task: TaskKind,
    pub pages: PageSelector,
    pub root: PathBuf,       // site root the page names resolve under
    pub min_len: usize,      // safety threshold in characters; 0 disables
    pub dry_run: bool,       // report outcomes, write nothing
    pub list_pages: bool,    // print page list then exit
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            task: TaskKind::Styles,
            pages: PageSelector::Default,
            root: PathBuf::from(DEFAULT_SITE_DIR),
            min_len: MIN_OUTPUT_CHARS,
            dry_run: false,
            list_pages: false,
        }
    }
}
