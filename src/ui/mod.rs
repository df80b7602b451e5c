//! Console presentation layer
//!
//! This module handles:
//! - Status lines after each generated document
//! - Verbose per-file detail on stderr
//! - A progress bar while rendering large icon sets
//!
//! All output goes through the [`Reporter`] trait, allowing different
//! implementations based on command-line flags or a silent one for tests.

use std::path::Path;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Reminder printed after registry documents are regenerated
pub const UPGRADE_STEP_REMINDER: &str = "If any new icons were added also add an upgrade step!";

/// Icon sets smaller than this do not get a progress bar
const PROGRESS_THRESHOLD: u64 = 200;

/// Output sink for generator runs
pub trait Reporter {
    /// Start rendering `total` entries of the named set
    fn start_set(&mut self, name: &str, total: u64);

    /// One entry was added to the current set
    fn entry(&mut self, key: &str);

    /// The current set is complete
    fn finish_set(&mut self);

    /// Extra detail, shown only in verbose mode
    fn detail(&mut self, message: &str);

    /// A document was written (or would be, in dry-run mode)
    fn wrote(&mut self, path: &Path, entries: usize, dry_run: bool);

    /// Generation finished; nudge the operator about upgrade steps
    fn done(&mut self);
}

/// Reporter printing to the terminal
pub struct ConsoleReporter {
    verbose: bool,
    progress: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            progress: None,
        }
    }
}

impl Reporter for ConsoleReporter {
    fn start_set(&mut self, name: &str, total: u64) {
        if self.verbose {
            eprintln!(
                "{} {} ({} entries)",
                style("Generating").cyan().bold(),
                name,
                total
            );
        }
        if total < PROGRESS_THRESHOLD || self.verbose {
            return;
        }

        let progress_style = ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        let pb = ProgressBar::new(total);
        pb.set_style(progress_style);
        pb.set_message(name.to_string());
        self.progress = Some(pb);
    }

    fn entry(&mut self, key: &str) {
        if let Some(ref pb) = self.progress {
            pb.inc(1);
        } else if self.verbose {
            eprintln!("  {key}");
        }
    }

    fn finish_set(&mut self) {
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
    }

    fn detail(&mut self, message: &str) {
        if self.verbose {
            eprintln!("{}", style(message).dim());
        }
    }

    fn wrote(&mut self, path: &Path, entries: usize, dry_run: bool) {
        let verb = if dry_run { "Would write" } else { "Wrote" };
        println!(
            "{} {} ({} entries)",
            style(verb).green().bold(),
            path.display(),
            entries
        );
    }

    fn done(&mut self) {
        println!("{}", style("Done.").green());
        println!("{}", style(UPGRADE_STEP_REMINDER).yellow());
    }
}

/// Reporter that prints nothing
#[allow(dead_code)]
#[derive(Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn start_set(&mut self, _name: &str, _total: u64) {}

    fn entry(&mut self, _key: &str) {}

    fn finish_set(&mut self) {}

    fn detail(&mut self, _message: &str) {}

    fn wrote(&mut self, _path: &Path, _entries: usize, _dry_run: bool) {}

    fn done(&mut self) {}
}
