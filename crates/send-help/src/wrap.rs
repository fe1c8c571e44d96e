//! Paragraph wrapping with label splicing.
//!
//! [`LineWrapper::wrap`] breaks a paragraph into indented lines no wider than
//! the column budget. Labels (command names, flags) are not part of the
//! paragraph: they are spliced into the padding of the first line afterwards,
//! which keeps continuation lines aligned under the description column:
//!
//! ```text
//! publish  Publish your package. In-depth description here about the
//!          given command.
//! ^^^^^^^ spliced label, continuation lines keep the indent
//! ```
//!
//! Widths are display widths: ANSI escape codes in words (an already-painted
//! current value, for instance) do not count toward the budget.

use console::measure_text_width;

/// Default column budget.
pub const DEFAULT_COLUMNS: usize = 80;

/// Replaces a character range of the first wrapped line with a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// Text inserted in place of the range. May contain ANSI codes.
    pub prefix: String,
    /// Number of characters replaced.
    pub length: usize,
    /// Character position where the replaced range starts.
    pub offset: usize,
}

impl Splice {
    /// Creates a splice replacing `length` characters from the line start.
    pub fn new(prefix: impl Into<String>, length: usize) -> Self {
        Self {
            prefix: prefix.into(),
            length,
            offset: 0,
        }
    }

    /// Moves the replaced range to start at `offset`.
    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Applies the splice to a single line.
    ///
    /// A line shorter than `offset` (a trimmed line with no words) is padded
    /// with spaces first, so the label still lands at its column.
    pub fn apply(&self, line: &str) -> String {
        let mut head: String = line.chars().take(self.offset).collect();
        let missing = self.offset.saturating_sub(head.chars().count());
        head.extend(std::iter::repeat(' ').take(missing));
        let tail: String = line.chars().skip(self.offset + self.length).collect();
        format!("{}{}{}", head, self.prefix, tail)
    }
}

/// Greedy word wrapper with a fixed column budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWrapper {
    columns: usize,
}

impl Default for LineWrapper {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

impl LineWrapper {
    /// Creates a wrapper for the given column budget.
    pub fn new(columns: usize) -> Self {
        Self { columns }
    }

    /// The column budget.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Wraps `text` into lines padded with `indent` spaces.
    ///
    /// Words are split on single spaces and packed greedily: a word is
    /// added while the line is under the budget and the word would not push
    /// it past the budget. Every line gets at least one word, so a word wider
    /// than the budget sits alone on an overlong line instead of being split.
    /// Each line is trimmed on the right.
    ///
    /// An empty paragraph yields one empty line, so a splice always has a
    /// line to land on.
    ///
    /// # Example
    ///
    /// ```rust
    /// use send_help::{LineWrapper, Splice};
    ///
    /// let lines = LineWrapper::new(20).wrap(
    ///     5,
    ///     "Publish your package to the registry.",
    ///     Some(&Splice::new("pub", 3)),
    /// );
    /// assert_eq!(lines, vec![
    ///     "pub  Publish your",
    ///     "     package to the",
    ///     "     registry.",
    /// ]);
    /// ```
    pub fn wrap(&self, indent: usize, text: &str, splice: Option<&Splice>) -> Vec<String> {
        let padding = " ".repeat(indent);
        let mut lines = Vec::new();
        let mut words = text.split(' ').peekable();

        while words.peek().is_some() {
            let mut line = padding.clone();
            let mut width = indent;
            let mut placed = false;

            while let Some(word) = words.peek() {
                let word_width = measure_text_width(word);
                if placed && (width >= self.columns || width + word_width > self.columns) {
                    break;
                }
                line.push_str(word);
                line.push(' ');
                width += word_width + 1;
                placed = true;
                words.next();
            }

            lines.push(line.trim_end().to_string());
        }

        if let (Some(splice), Some(first)) = (splice, lines.first_mut()) {
            *first = splice.apply(first);
        }

        lines
    }
}

/// Wraps `text` at the default column budget. See [`LineWrapper::wrap`].
pub fn block(indent: usize, text: &str, splice: Option<&Splice>) -> Vec<String> {
    LineWrapper::default().wrap(indent, text, splice)
}
