//! Progress and action reporting
//!
//! Everything here goes to stderr so that stdout carries only the exported
//! document. `--quiet` silences it; `--markdown` turns off ANSI styling so
//! the output can be pasted into rendered documents.

use std::fmt::Display;
use std::sync::{Arc, Mutex};

use colored::{ColoredString, Colorize};

/// Kind of line being reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Read-only progress (fetching state)
    Progress,
    /// A mutation being applied
    Action,
    /// A mutation skipped under dry-run
    DryRun,
    /// Summary information
    Info,
}

/// Reports progress and actions to the user.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    quiet: bool,
    captured: Option<Arc<Mutex<Vec<String>>>>,
}

impl Reporter {
    /// Create a reporter. `markdown` disables ANSI styling process-wide.
    pub fn new(quiet: bool, markdown: bool) -> Self {
        if markdown {
            colored::control::set_override(false);
        }
        Self {
            quiet,
            captured: None,
        }
    }

    /// A reporter that records plain lines instead of printing them.
    #[cfg(test)]
    pub fn capturing() -> Self {
        Self {
            quiet: false,
            captured: Some(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    /// Lines recorded by a capturing reporter.
    #[cfg(test)]
    pub fn lines(&self) -> Vec<String> {
        self.captured
            .as_ref()
            .and_then(|c| c.lock().ok().map(|lines| lines.clone()))
            .unwrap_or_default()
    }

    pub fn progress(&self, message: impl Display) {
        self.emit(LineKind::Progress, message.to_string());
    }

    pub fn action(&self, message: impl Display) {
        self.emit(LineKind::Action, message.to_string());
    }

    /// Report a mutating call that was skipped.
    pub fn dry_run(&self, method: &str, target: impl Display) {
        self.emit(LineKind::DryRun, format!("Dry run: {} [{}]", method, target));
    }

    pub fn info(&self, message: impl Display) {
        self.emit(LineKind::Info, message.to_string());
    }

    fn emit(&self, kind: LineKind, line: String) {
        if let Some(captured) = &self.captured {
            if let Ok(mut lines) = captured.lock() {
                lines.push(line);
            }
            return;
        }
        if self.quiet {
            return;
        }
        eprintln!("{}", style(kind, &line));
    }
}

fn style(kind: LineKind, line: &str) -> ColoredString {
    match kind {
        LineKind::Progress => line.dimmed(),
        LineKind::Action => line.green(),
        LineKind::DryRun => line.yellow(),
        LineKind::Info => line.normal(),
    }
}
