//! Append-only output console state.

use codebench_core::config::DEFAULT_MAX_CONSOLE_LINES;
use codebench_engine::{FAILURE_PREFIX, SUCCESS_PREFIX};

/// Marker line left behind by [`OutputConsole::clear`].
pub const CLEARED_MARKER: &str = "Console cleared";

const BANNER_READY: &str = "Ready to run your code...";

/// Display-only classification derived from a line's leading characters.
///
/// Classification never affects stored lines; it only tells a renderer how to
/// tint a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Run preamble (`> Running ...`).
    Prompt,
    /// Success annotation.
    Success,
    /// Failure/timeout/unsupported annotation.
    Error,
    Plain,
}

/// Classify one line for display.
pub fn line_kind(line: &str) -> LineKind {
    if line.starts_with('>') {
        LineKind::Prompt
    } else if line.starts_with(SUCCESS_PREFIX) {
        LineKind::Success
    } else if line.starts_with(FAILURE_PREFIX) {
        LineKind::Error
    } else {
        LineKind::Plain
    }
}

/// Append-only line log with bounded history.
#[derive(Debug, Clone)]
pub struct OutputConsole {
    lines: Vec<String>,
    expanded: bool,
    max_lines: usize,
}

impl OutputConsole {
    /// A console opened with the two-line banner, retaining the default
    /// number of lines.
    pub fn new() -> Self {
        Self::with_max_lines(DEFAULT_MAX_CONSOLE_LINES)
    }

    pub fn with_max_lines(max_lines: usize) -> Self {
        Self {
            lines: vec![
                format!("Codebench Console v{}", env!("CARGO_PKG_VERSION")),
                BANNER_READY.to_string(),
            ],
            expanded: true,
            max_lines: max_lines.max(1),
        }
    }

    /// Append lines in order, dropping the oldest on overflow.
    pub fn append<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        if self.lines.len() > self.max_lines {
            let excess = self.lines.len() - self.max_lines;
            self.lines.drain(..excess);
        }
    }

    /// Reset the log to the single cleared-marker line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.lines.push(CLEARED_MARKER.to_string());
    }

    /// Flip the display-only expanded state.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// All lines joined with newlines, for export/clipboard.
    pub fn snapshot_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl Default for OutputConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_with_the_banner() {
        let console = OutputConsole::new();
        assert_eq!(console.line_count(), 2);
        assert!(console.lines()[0].starts_with("Codebench Console v"));
        assert_eq!(console.lines()[1], BANNER_READY);
    }

    #[test]
    fn clear_leaves_only_the_marker() {
        let mut console = OutputConsole::new();
        console.append(["a", "b"]);
        console.clear();
        assert_eq!(console.snapshot_text(), CLEARED_MARKER);
        assert!(!console.snapshot_text().contains('a'));
    }

    #[test]
    fn toggle_expanded_never_touches_lines() {
        let mut console = OutputConsole::new();
        console.append(["kept"]);
        let before = console.lines().to_vec();

        console.toggle_expanded();
        assert!(!console.expanded());
        console.toggle_expanded();
        assert!(console.expanded());

        assert_eq!(console.lines(), &before[..]);
    }

    #[test]
    fn snapshot_joins_with_newlines() {
        let mut console = OutputConsole::with_max_lines(16);
        console.clear();
        console.append(["one", "two"]);
        assert_eq!(console.snapshot_text(), "Console cleared\none\ntwo");
    }

    #[test]
    fn overflow_drops_the_oldest_lines_first() {
        let mut console = OutputConsole::with_max_lines(3);
        console.append(["a", "b", "c", "d"]);
        assert_eq!(console.lines(), &["b", "c", "d"]);
    }

    #[test]
    fn classification_reads_leading_characters_only() {
        assert_eq!(line_kind("> Running javascript code..."), LineKind::Prompt);
        assert_eq!(line_kind("✓ Code executed successfully"), LineKind::Success);
        assert_eq!(line_kind("✗ boom"), LineKind::Error);
        assert_eq!(line_kind("  Execution time: 3ms"), LineKind::Plain);
        assert_eq!(line_kind(""), LineKind::Plain);
    }
}
