//! Declarative command descriptions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::DetailLevel;

/// Commands keyed by name, in display order.
pub type Commands = IndexMap<String, CommandSpec>;

/// Description of one CLI command.
///
/// `description` and each flag description are lists of sentences: the first
/// sentence is the short form shown in the command list, all sentences
/// joined make up the long form shown when the command is requested on its
/// own.
///
/// # Example
///
/// ```rust
/// use send_help::CommandSpec;
///
/// let publish = CommandSpec::new(["Publish your package.", "In-depth description."])
///     .example("npm publish")
///     .debug("npm*")
///     .flag("--registry", ["Configures the registry."]);
///
/// assert_eq!(publish.short_description(), "Publish your package.");
/// assert_eq!(publish.flags.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Description sentences. Must not be empty.
    pub description: Vec<String>,

    /// Example invocations, shown in the detailed view.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,

    /// Value for the `DEBUG` environment variable that enables this
    /// command's debug output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,

    /// Flags keyed by the literal token the CLI accepts (e.g. `--registry`).
    #[serde(default)]
    pub flags: IndexMap<String, Vec<String>>,
}

impl CommandSpec {
    /// Creates a command with the given description sentences.
    pub fn new<I>(description: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            description: description.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Adds an example invocation.
    pub fn example(mut self, code: impl Into<String>) -> Self {
        self.examples.push(code.into());
        self
    }

    /// Sets the `DEBUG` namespace for this command.
    pub fn debug(mut self, namespace: impl Into<String>) -> Self {
        self.debug = Some(namespace.into());
        self
    }

    /// Adds a flag with its description sentences.
    pub fn flag<I>(mut self, label: impl Into<String>, description: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.flags.insert(
            label.into(),
            description.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// The first description sentence.
    pub fn short_description(&self) -> &str {
        self.description.first().map(String::as_str).unwrap_or("")
    }

    /// All description sentences joined by spaces.
    pub fn long_description(&self) -> String {
        self.description.join(" ")
    }

    /// The description text for the given detail level.
    pub fn description_for(&self, level: DetailLevel) -> String {
        describe(&self.description, level)
    }
}

/// Picks the first sentence in summary mode and all sentences otherwise.
pub(crate) fn describe(sentences: &[String], level: DetailLevel) -> String {
    match level {
        DetailLevel::Summary => sentences.first().cloned().unwrap_or_default(),
        DetailLevel::Detailed => sentences.join(" "),
    }
}

/// Strips `--`, `--no-` or `--disable-` from a flag token.
///
/// This is the key under which a flag's current value is looked up in
/// [`HelpConfig::flags`](crate::HelpConfig::flags).
///
/// ```rust
/// use send_help::canonical_flag_name;
///
/// assert_eq!(canonical_flag_name("--registry"), "registry");
/// assert_eq!(canonical_flag_name("--no-color"), "color");
/// assert_eq!(canonical_flag_name("--disable-cache"), "cache");
/// assert_eq!(canonical_flag_name("-v"), "-v");
/// ```
pub fn canonical_flag_name(label: &str) -> &str {
    match label.strip_prefix("--") {
        Some(rest) => rest
            .strip_prefix("no-")
            .or_else(|| rest.strip_prefix("disable-"))
            .unwrap_or(rest),
        None => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publish() -> CommandSpec {
        CommandSpec::new(["Publish your package.", "Extra details."])
            .flag("--registry", ["Configures the registry.", "More."])
    }

    #[test]
    fn test_short_and_long_description() {
        let cmd = publish();
        assert_eq!(cmd.short_description(), "Publish your package.");
        assert_eq!(cmd.long_description(), "Publish your package. Extra details.");
    }

    #[test]
    fn test_description_for_level() {
        let cmd = publish();
        assert_eq!(
            cmd.description_for(DetailLevel::Summary),
            "Publish your package."
        );
        assert_eq!(
            cmd.description_for(DetailLevel::Detailed),
            "Publish your package. Extra details."
        );
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(describe(&[], DetailLevel::Summary), "");
        assert_eq!(describe(&[], DetailLevel::Detailed), "");
    }

    #[test]
    fn test_flags_keep_insertion_order() {
        let cmd = CommandSpec::new(["x"])
            .flag("--zeta", ["z"])
            .flag("--alpha", ["a"])
            .flag("--mid", ["m"]);
        let labels: Vec<&str> = cmd.flags.keys().map(String::as_str).collect();
        assert_eq!(labels, ["--zeta", "--alpha", "--mid"]);
    }

    #[test]
    fn test_canonical_flag_name() {
        assert_eq!(canonical_flag_name("--registry"), "registry");
        assert_eq!(canonical_flag_name("--no-color"), "color");
        assert_eq!(canonical_flag_name("--disable-cache"), "cache");
        assert_eq!(canonical_flag_name("--nothing"), "nothing");
        assert_eq!(canonical_flag_name("no-dash"), "no-dash");
        assert_eq!(canonical_flag_name("-v"), "-v");
    }

    #[test]
    fn test_deserialize_defaults() {
        let cmd: CommandSpec = serde_json::from_str(r#"{"description": ["Only this."]}"#).unwrap();
        assert!(cmd.examples.is_empty());
        assert!(cmd.debug.is_none());
        assert!(cmd.flags.is_empty());
    }
}
