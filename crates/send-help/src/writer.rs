//! Append-only line buffer used to compose help output.

use crate::paint::{painter_for, Painter};

/// Shell prompt marker placed before example commands.
pub const PROMPT: &str = "  $ ";

/// Accumulates output lines and joins them at the end.
///
/// The painter is fixed when the writer is created: a writer either colors
/// everything it is asked to paint or nothing.
///
/// # Example
///
/// ```rust
/// use send_help::Writer;
///
/// let mut w = Writer::new(false);
/// w.header("examples");
/// w.example("npm publish");
/// assert_eq!(w.output(), "EXAMPLES:\n\n  $ npm publish");
/// ```
pub struct Writer {
    lines: Vec<String>,
    painter: Box<dyn Painter>,
}

impl Writer {
    /// Creates a writer with the built-in painter for `colors`.
    pub fn new(colors: bool) -> Self {
        Self::with_painter(painter_for(colors))
    }

    /// Creates a writer using a custom painter.
    pub fn with_painter(painter: Box<dyn Painter>) -> Self {
        Self {
            lines: Vec::new(),
            painter,
        }
    }

    /// Appends lines verbatim, in order.
    pub fn write<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// Appends a single line.
    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Appends `TITLE:` followed by a blank line.
    pub fn header(&mut self, title: &str) {
        self.lines.push(format!("{}:", title.to_uppercase()));
        self.blank();
    }

    /// Appends an example command behind a shell prompt.
    pub fn example(&mut self, code: &str) {
        self.lines.push(format!("{}{}", PROMPT, code));
    }

    /// Paints `text` with this writer's painter.
    pub fn paint(&self, text: &str, color: &str) -> String {
        self.painter.paint(text, color)
    }

    /// Lines written so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Joins all lines with newlines. Does not clear the buffer.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }
}

impl std::fmt::Debug for Writer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Writer")
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}
