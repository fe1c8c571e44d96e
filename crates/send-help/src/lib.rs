//! # Send Help - Aligned Help Pages for CLIs
//!
//! `send-help` turns a declarative description of commands and flags into a
//! help page: a version banner, an aligned command list with wrapped
//! descriptions, and either a "learn more" footer (summary mode) or the
//! examples and debugging instructions for one command (detailed mode).
//!
//! The crate only composes text. Deciding whether the terminal supports
//! color, reading flag values and printing the result are left to the caller.
//!
//! ## Core Concepts
//!
//! - [`CommandSpec`]: description sentences, flags, examples and debug hint
//!   for one command
//! - [`HelpConfig`]: application metadata and rendering options
//! - [`DetailLevel`]: summary of every command, or detail for one
//! - [`Painter`](paint::Painter): the color capability, swappable for tests
//!   or other backends
//! - [`render`]: produces the page as a single string
//!
//! ## Quick Start
//!
//! ```rust
//! use send_help::{render, CommandSpec, Commands, HelpConfig};
//!
//! let mut commands = Commands::new();
//! commands.insert(
//!     "publish".into(),
//!     CommandSpec::new(["Publish your package.", "In-depth description here."])
//!         .example("npm publish")
//!         .flag("--registry", ["Configures the registry.", "Additional details."]),
//! );
//!
//! let config = HelpConfig::new("npm")
//!     .version("1.2.3")
//!     .description("npm client as example");
//!
//! let help = render(&commands, &config).unwrap();
//! assert!(help.contains("npm (version: 1.2.3)"));
//! assert!(help.contains("COMMANDS:"));
//! assert!(help.contains("LEARN MORE:"));
//!
//! let detail = render(&commands, &config.specific("publish")).unwrap();
//! assert!(detail.contains("  $ npm publish"));
//! assert!(!detail.contains("LEARN MORE:"));
//! ```
//!
//! ## Building Blocks
//!
//! The pieces the renderer is made of are public and usable on their own:
//! [`longest`] measures label columns, [`LineWrapper`] wraps paragraphs and
//! splices labels into them, and [`Writer`] accumulates lines.

mod config;
mod document;
mod error;
mod model;
pub mod paint;
mod render;
mod width;
mod wrap;
mod writer;

pub use config::{DetailLevel, HelpConfig, MAX_COLUMNS};
pub use document::HelpDocument;
pub use error::{HelpError, Result};
pub use model::{canonical_flag_name, CommandSpec, Commands};
pub use render::{render, render_with_painter};
pub use width::longest;
pub use wrap::{block, LineWrapper, Splice, DEFAULT_COLUMNS};
pub use writer::{Writer, PROMPT};
