//! Color painting for help output.
//!
//! Rendering never talks to a color library directly. Everything that ends
//! up colored goes through a [`Painter`], a single-method capability that maps
//! `(text, color name)` to a styled string. Two painters ship with the crate:
//!
//! - [`PlainPainter`]: the identity function, used when colors are disabled
//! - [`AnsiPainter`]: 256-color ANSI foreground sequences via `console`
//!
//! Any `Fn(&str, &str) -> String` closure is also a painter, which keeps
//! tests and alternative backends (HTML, bracket tags) trivial to plug in:
//!
//! ```rust
//! use send_help::paint::Painter;
//!
//! let tags = |text: &str, color: &str| format!("[{color}]{text}[/{color}]");
//! assert_eq!(tags.paint("npm", "orange"), "[orange]npm[/orange]");
//! ```

mod color;

pub use color::Rgb;

use console::Style;

/// Maps a piece of text and a color name to styled text.
pub trait Painter {
    /// Returns `text` styled with `color`.
    fn paint(&self, text: &str, color: &str) -> String;
}

impl<F> Painter for F
where
    F: Fn(&str, &str) -> String,
{
    fn paint(&self, text: &str, color: &str) -> String {
        self(text, color)
    }
}

/// Painter that returns text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn paint(&self, text: &str, _color: &str) -> String {
        text.to_string()
    }
}

/// Painter that emits ANSI 256-color foreground sequences.
///
/// Styling is forced on: whether the destination supports color is the
/// caller's decision, made once when choosing a painter.
///
/// ```rust
/// use send_help::paint::{AnsiPainter, Painter};
///
/// let painted = AnsiPainter.paint("text", "red");
/// assert!(painted.starts_with("\x1b[38;5;196m"));
/// assert_eq!(console::strip_ansi_codes(&painted), "text");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPainter;

impl Painter for AnsiPainter {
    fn paint(&self, text: &str, color: &str) -> String {
        match Rgb::parse(color) {
            Some(rgb) => Style::new()
                .color256(rgb.to_ansi256())
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            None => {
                tracing::warn!(color, "unknown color, leaving text unpainted");
                text.to_string()
            }
        }
    }
}

/// Returns the built-in painter for the given colors setting.
pub fn painter_for(colors: bool) -> Box<dyn Painter> {
    if colors {
        Box::new(AnsiPainter)
    } else {
        Box::new(PlainPainter)
    }
}
