//! Help rendering configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HelpError, Result};
use crate::model::canonical_flag_name;
use crate::paint::Rgb;
use crate::wrap::DEFAULT_COLUMNS;

/// Largest accepted column budget.
pub const MAX_COLUMNS: usize = u16::MAX as usize;

/// How much of each command is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailLevel {
    /// Every command, first sentences only, with a "learn more" footer.
    #[default]
    Summary,
    /// One command with full descriptions, current flag values, examples
    /// and debugging instructions.
    Detailed,
}

/// Configuration for rendering a help page.
///
/// Every field except `name` has a default, both for the builder API and
/// when deserializing from YAML or JSON:
///
/// | field         | default     |
/// |---------------|-------------|
/// | `version`     | `"0.0.0"`   |
/// | `description` | none        |
/// | `accent`      | `"orange"`  |
/// | `subtitle`    | `"dimgray"` |
/// | `flags`       | empty       |
/// | `prefix`      | `2`         |
/// | `specific`    | none        |
/// | `colors`      | `false`     |
/// | `width`       | `80`        |
///
/// # Example
///
/// ```rust
/// use send_help::{DetailLevel, HelpConfig};
///
/// let config = HelpConfig::new("npm")
///     .version("1.2.3")
///     .description("npm client as example")
///     .accent("#EA2039")
///     .flag_value("registry", "https://registry.npmjs.org/")
///     .specific("publish");
///
/// assert_eq!(config.detail_level(), DetailLevel::Detailed);
/// assert_eq!(
///     config.current_value("--registry").as_deref(),
///     Some("https://registry.npmjs.org/")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpConfig {
    /// Application name.
    pub name: String,

    /// Application version.
    #[serde(default = "default_version")]
    pub version: String,

    /// Application summary shown under the banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Color for the banner, command names and values.
    #[serde(default = "default_accent")]
    pub accent: String,

    /// Color for flags and example code.
    #[serde(default = "default_subtitle", alias = "subtile")]
    pub subtitle: String,

    /// Current flag values keyed by canonical flag name (see
    /// [`canonical_flag_name`]).
    #[serde(default)]
    pub flags: IndexMap<String, Value>,

    /// Spaces between the label columns and the descriptions.
    #[serde(default = "default_prefix")]
    pub prefix: usize,

    /// Command to render in detail. `None` renders a summary of all commands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific: Option<String>,

    /// Whether to emit ANSI colors.
    #[serde(default, alias = "color")]
    pub colors: bool,

    /// Column budget for word wrapping.
    #[serde(default = "default_width")]
    pub width: usize,
}

fn default_version() -> String {
    "0.0.0".to_string()
}

fn default_accent() -> String {
    "orange".to_string()
}

fn default_subtitle() -> String {
    "dimgray".to_string()
}

fn default_prefix() -> usize {
    2
}

fn default_width() -> usize {
    DEFAULT_COLUMNS
}

impl HelpConfig {
    /// Creates a configuration with defaults for everything but the name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: default_version(),
            description: None,
            accent: default_accent(),
            subtitle: default_subtitle(),
            flags: IndexMap::new(),
            prefix: default_prefix(),
            specific: None,
            colors: false,
            width: default_width(),
        }
    }

    /// Sets the version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the application summary.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the accent color.
    pub fn accent(mut self, color: impl Into<String>) -> Self {
        self.accent = color.into();
        self
    }

    /// Sets the subtitle color.
    pub fn subtitle(mut self, color: impl Into<String>) -> Self {
        self.subtitle = color.into();
        self
    }

    /// Records the current value of a flag, by canonical name.
    pub fn flag_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.flags.insert(name.into(), value.into());
        self
    }

    /// Sets the description column gap.
    pub fn prefix(mut self, prefix: usize) -> Self {
        self.prefix = prefix;
        self
    }

    /// Selects one command for the detailed view.
    pub fn specific(mut self, command: impl Into<String>) -> Self {
        self.specific = Some(command.into());
        self
    }

    /// Enables or disables ANSI colors.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Sets the column budget.
    pub fn width(mut self, columns: usize) -> Self {
        self.width = columns;
        self
    }

    /// The detail level implied by [`specific`](Self::specific).
    pub fn detail_level(&self) -> DetailLevel {
        match self.specific {
            Some(_) => DetailLevel::Detailed,
            None => DetailLevel::Summary,
        }
    }

    /// Whether the named command should be rendered.
    pub fn selects(&self, command: &str) -> bool {
        self.specific.as_deref().map_or(true, |s| s == command)
    }

    /// The current value recorded for a flag token, formatted for display.
    ///
    /// Strings are shown as-is, other values in their JSON form.
    pub fn current_value(&self, flag: &str) -> Option<String> {
        self.flags
            .get(canonical_flag_name(flag))
            .map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
    }

    /// Checks that the prefix fits within the column budget and the budget
    /// is at most [`MAX_COLUMNS`].
    pub fn validate_layout(&self) -> Result<()> {
        if self.width > MAX_COLUMNS || self.prefix > self.width {
            return Err(HelpError::InvalidLayout {
                prefix: self.prefix,
                width: self.width,
                max: MAX_COLUMNS,
            });
        }
        Ok(())
    }

    /// Checks that the accent and subtitle colors resolve.
    ///
    /// Only meaningful for the built-in ANSI painter; custom painters may
    /// accept any vocabulary they like.
    pub fn validate(&self) -> Result<()> {
        for (role, value) in [("accent", &self.accent), ("subtitle", &self.subtitle)] {
            if Rgb::parse(value).is_none() {
                return Err(HelpError::UnknownColor {
                    role,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
