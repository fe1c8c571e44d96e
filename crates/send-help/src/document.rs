//! Help documents: configuration and commands in one file.
//!
//! A document pairs an [`app`](HelpDocument::app) section, deserialized into
//! [`HelpConfig`], with an ordered map of commands. YAML and JSON are both
//! accepted; command order in the file is the display order.
//!
//! ```yaml
//! app:
//!   name: npm
//!   version: 1.2.3
//!   description: npm client as example
//!   accent: "#EA2039"
//!   flags:
//!     registry: https://registry.npmjs.org/
//! commands:
//!   publish:
//!     description:
//!       - Publish your package.
//!       - In-depth description here about the given command.
//!     examples:
//!       - npm publish
//!     debug: npm*
//!     flags:
//!       --registry:
//!         - Configures the registry.
//!         - Additional details.
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::HelpConfig;
use crate::error::{HelpError, Result};
use crate::model::Commands;
use crate::render::render;

/// A complete help description loaded from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpDocument {
    /// Rendering configuration and application metadata.
    pub app: HelpConfig,
    /// Commands in display order.
    #[serde(default)]
    pub commands: Commands,
}

impl HelpDocument {
    /// Parses a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a JSON document.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads a document from disk, picking the format from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(HelpError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| HelpError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded help document");
        parse(&source)
    }

    /// Renders the document with its own configuration.
    pub fn render(&self) -> Result<String> {
        render(&self.commands, &self.app)
    }
}
