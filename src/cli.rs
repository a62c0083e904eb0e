// src/cli.rs
use std::{env, path::{Path, PathBuf}};

use crate::config::options::{PageSelector, PatchOptions, TaskKind};
use crate::patch::Outcome;
use crate::progress::Progress;
use crate::runner;

/// Console progress sink: one status line per page, the way the original
/// hand-run fix scripts printed theirs.
#[derive(Default)]
struct CliProgress {
    changed: usize,
}

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, page: &Path, outcome: &Outcome) {
        if outcome.changed() {
            self.changed += 1;
        }
        println!("{}: {}", page.display(), outcome.describe());
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut opts = PatchOptions::default();
    parse_cli(&mut opts)?;

    if opts.list_pages {
        for page in opts.task.default_pages() {
            println!("{page}");
        }
        return Ok(());
    }

    let mut progress = CliProgress::default();
    let summary = runner::run(&opts, Some(&mut progress))?;

    if opts.dry_run {
        println!("Dry run: {} of {} page(s) would be rewritten.", progress.changed, summary.reports.len());
    } else {
        println!("Done. {} of {} page(s) rewritten.", summary.files_written.len(), summary.reports.len());
    }
    Ok(())
}

fn parse_cli(opts: &mut PatchOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--task" => {
                let v = args.next().ok_or("Missing value for --task")?;
                opts.task = match v.to_ascii_lowercase().as_str() {
                    "styles" => TaskKind::Styles,
                    "scroll-top" => TaskKind::ScrollTop,
                    other => return Err(format!("Unknown task: {}", other).into()),
                };}
            "--pages" => {
                let v = args.next().ok_or("Missing value for --pages")?;
                opts.pages = PageSelector::Files(parse_pages_list(&v)?);}
            "-r" | "--root" => opts.root = PathBuf::from(args.next().ok_or("Missing root directory")?),
            "--min-len" => {
                let v: usize = args.next().ok_or("Missing value for --min-len")?.parse()?;
                opts.min_len = v;}
            "-n" | "--dry-run" => opts.dry_run = true,
            "--list-pages" => opts.list_pages = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

fn parse_pages_list(s: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        out.push(s!(part));
    }
    if out.is_empty() {
        return Err("Empty --pages list".into());
    }
    Ok(out)
}
