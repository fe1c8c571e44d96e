//! Error types for help rendering and document loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a help document or rendering it.
///
/// Rendering itself is a pure transformation; the only failures are
/// contract violations in the description (caught before any line is
/// written) and problems reading a document from disk.
#[derive(Debug, Error)]
pub enum HelpError {
    /// A command has no description sentences, so there is no short form to list.
    #[error("command '{command}' has an empty description")]
    EmptyDescription { command: String },

    /// A flag has no description sentences.
    #[error("flag '{flag}' of command '{command}' has an empty description")]
    EmptyFlagDescription { command: String, flag: String },

    /// A configured color name could not be resolved.
    #[error("unknown {role} color: {value}")]
    UnknownColor { role: &'static str, value: String },

    /// The prefix or column budget is too large to lay out.
    #[error("prefix {prefix} does not fit a {width}-column layout (max {max} columns)")]
    InvalidLayout {
        prefix: usize,
        width: usize,
        max: usize,
    },

    /// Reading a document from disk failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML for the expected shape.
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not valid JSON for the expected shape.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not name a supported document format.
    #[error("unsupported document format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Result type for help operations.
pub type Result<T> = std::result::Result<T, HelpError>;
