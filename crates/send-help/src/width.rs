//! Column width measurement.

use std::fmt::Display;

use console::{measure_text_width, pad_str, Alignment};

/// Returns the display width of the widest value, or 0 for no values.
///
/// Widths are measured in terminal columns with ANSI escape codes ignored,
/// so already-painted labels measure the same as their plain text.
///
/// # Example
///
/// ```rust
/// use send_help::longest;
///
/// assert_eq!(longest(["foo", "bar", "lulz"]), 4);
/// assert_eq!(longest(Vec::<String>::new()), 0);
/// assert_eq!(longest([1, 200, 30]), 3);
/// ```
pub fn longest<I>(values: I) -> usize
where
    I: IntoIterator,
    I::Item: Display,
{
    values
        .into_iter()
        .map(|value| measure_text_width(&value.to_string()))
        .max()
        .unwrap_or(0)
}

/// Pads on the right (left-aligns) to reach `width`. Never truncates.
pub(crate) fn pad_end(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads on the left (right-aligns) to reach `width`. Never truncates.
pub(crate) fn pad_start(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}
