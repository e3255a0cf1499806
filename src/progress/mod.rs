//! Progress reporting and the end-of-run notification

use crate::di::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};

/// Final state shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    /// Archive saved, but some mods failed
    Partial,
    Failure,
}

/// End-of-run notification: a glyph, a headline, and optional detail lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub headline: String,
    /// Per-item failure messages
    pub details: Vec<String>,
    /// Possible causes, shown when nothing could be downloaded
    pub hints: Vec<String>,
}

impl Notification {
    pub fn success(headline: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            headline: headline.into(),
            details: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn partial(headline: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            kind: NotificationKind::Partial,
            headline: headline.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn failure(headline: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            headline: headline.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn with_hints(mut self, hints: Vec<String>) -> Self {
        self.hints = hints;
        self
    }

    pub fn glyph(&self) -> char {
        match self.kind {
            NotificationKind::Success | NotificationKind::Partial => '✔',
            NotificationKind::Failure => '✖',
        }
    }

    fn has_details(&self) -> bool {
        !self.details.is_empty() || !self.hints.is_empty()
    }

    /// Terminal rendering: the glyph line, then the detail lists if any
    pub fn render(&self) -> String {
        let headline = format!("{} {}", self.glyph(), self.headline);
        if !self.has_details() {
            return headline;
        }
        let mut lines = vec![headline];
        if !self.details.is_empty() {
            lines.push("  Mods not downloaded:".to_string());
            lines.extend(self.details.iter().map(|d| format!("    - {}", d)));
        }
        if !self.hints.is_empty() {
            lines.push("  Possible causes:".to_string());
            lines.extend(self.hints.iter().map(|h| format!("    - {}", h)));
        }
        lines.join("\n")
    }
}

/// Percentage for item `index` of `total`
///
/// `half_step` adds half an item, used between the resolve and download
/// phases of the same item.
pub fn item_percent(index: usize, total: usize, half_step: bool) -> f64 {
    if total == 0 {
        return 100.0;
    }
    let done = index as f64 + if half_step { 0.5 } else { 0.0 };
    (done / total as f64 * 100.0).min(100.0)
}

/// Progress bar on the terminal; cleared once the run completes
pub struct TerminalReporter {
    bar: ProgressBar,
}

impl TerminalReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos:>3}% {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self { bar }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for TerminalReporter {
    fn update(&self, percent: f64, message: &str) {
        self.bar.set_position(percent.round() as u64);
        self.bar.set_message(message.to_string());
    }

    fn notify(&self, notification: &Notification) {
        self.bar.finish_and_clear();
        println!("{}", notification.render());
    }
}
