//! Help page rendering.
//!
//! The layout has two columns of labels and one of descriptions:
//!
//! ```text
//! npm (version: 1.2.3)
//!
//! npm client as example
//!
//! COMMANDS:
//!
//! publish  Publish your package.
//!          --registry  Configures the registry.
//!
//! LEARN MORE:
//! ...
//! ```
//!
//! Column widths are computed once over every command and every flag, so
//! the detailed view of a single command lines up exactly like the summary.

use console::measure_text_width;
use tracing::{debug, trace, warn};

use crate::config::{DetailLevel, HelpConfig};
use crate::error::{HelpError, Result};
use crate::model::{describe, CommandSpec, Commands};
use crate::paint::{painter_for, Painter};
use crate::width::{longest, pad_end, pad_start};
use crate::wrap::{LineWrapper, Splice};
use crate::writer::Writer;

const DEBUG_PROSE: [&str; 3] = [
    "This command is introspected with either `diagnostics` or `debug` to provide",
    "additional debugging information. This output can be enabled by setting the",
    "appropriate DEBUG environment flag before you run the command:",
];

const DEBUG_PLACEHOLDER: &str = "# The rest of your CLI flags here";

const LEARN_MORE_PROSE: &str =
    "Each command has additional information available, you can find this by running:";

const COMMAND_PLACEHOLDER: &str = "<command>";

/// Renders the help page for `commands`.
///
/// Colors come from the built-in painter selected by
/// [`HelpConfig::colors`]; when colors are on, the configured accent and
/// subtitle colors must resolve.
///
/// # Errors
///
/// Fails before producing any output if a command or flag has an empty
/// description, if the prefix does not fit the column budget, or if colors
/// are enabled with an unknown color name.
///
/// # Example
///
/// ```rust
/// use send_help::{render, CommandSpec, Commands, HelpConfig};
///
/// let mut commands = Commands::new();
/// commands.insert(
///     "publish".into(),
///     CommandSpec::new(["Publish your package."])
///         .flag("--registry", ["Configures the registry."]),
/// );
///
/// let help = render(&commands, &HelpConfig::new("npm").version("1.2.3")).unwrap();
/// assert!(help.starts_with("npm (version: 1.2.3)"));
/// assert!(help.contains("publish  Publish your package."));
/// assert!(help.contains("         --registry  Configures the registry."));
/// ```
pub fn render(commands: &Commands, config: &HelpConfig) -> Result<String> {
    if config.colors {
        config.validate()?;
    }
    render_with_painter(commands, config, painter_for(config.colors))
}

/// Renders the help page using a custom painter.
///
/// [`HelpConfig::colors`] is ignored; the painter decides what painting means.
pub fn render_with_painter(
    commands: &Commands,
    config: &HelpConfig,
    painter: Box<dyn Painter>,
) -> Result<String> {
    config.validate_layout()?;
    validate_commands(commands)?;

    let layout = Layout::new(commands, config);
    debug!(
        longest_command = layout.longest_command,
        longest_flag = layout.longest_flag,
        level = ?layout.level,
        "rendering help"
    );

    let mut w = Writer::with_painter(painter);
    banner(&mut w, config, &layout.wrapper);

    match layout.level {
        DetailLevel::Summary => w.header("Commands"),
        DetailLevel::Detailed => w.header("Command"),
    }

    if let Some(specific) = config.specific.as_deref() {
        if !commands.contains_key(specific) {
            warn!(command = specific, "requested command is not described");
        }
    }

    for (name, command) in commands {
        if !config.selects(name) {
            continue;
        }
        trace!(command = %name, "rendering command");

        layout.command(&mut w, config, name, command);

        if layout.level == DetailLevel::Summary {
            continue;
        }

        examples(&mut w, config, command);
        debugging(&mut w, config, name, command);
    }

    if layout.level == DetailLevel::Summary {
        learn_more(&mut w, config);
    }

    Ok(w.output())
}

/// Every command needs a short description and so does every flag.
fn validate_commands(commands: &Commands) -> Result<()> {
    for (name, command) in commands {
        if command.description.is_empty() {
            return Err(HelpError::EmptyDescription {
                command: name.clone(),
            });
        }
        if let Some(flag) = command
            .flags
            .iter()
            .find_map(|(flag, sentences)| sentences.is_empty().then_some(flag))
        {
            return Err(HelpError::EmptyFlagDescription {
                command: name.clone(),
                flag: flag.clone(),
            });
        }
    }
    Ok(())
}

/// Column geometry shared by every command on the page.
struct Layout {
    level: DetailLevel,
    wrapper: LineWrapper,
    longest_command: usize,
    longest_flag: usize,
    prefix: usize,
}

impl Layout {
    fn new(commands: &Commands, config: &HelpConfig) -> Self {
        Self {
            level: config.detail_level(),
            wrapper: LineWrapper::new(config.width),
            longest_command: longest(commands.keys()),
            longest_flag: longest(commands.values().flat_map(|c| c.flags.keys())),
            prefix: config.prefix,
        }
    }

    /// Column where flag labels start.
    fn flag_column(&self) -> usize {
        self.longest_command + self.prefix
    }

    /// Width flag labels are padded to. Flags right-align at least to the
    /// command column, wider flags push the column out.
    fn flag_label_width(&self) -> usize {
        self.longest_flag.max(self.flag_column())
    }

    /// Column where flag descriptions start.
    fn flag_indent(&self) -> usize {
        self.flag_column() + self.flag_label_width() + self.prefix
    }

    fn command(&self, w: &mut Writer, config: &HelpConfig, name: &str, command: &CommandSpec) {
        let label = pad_end(name, self.longest_command);
        let splice = Splice::new(w.paint(&label, &config.accent), measure_text_width(&label));
        let lines = self.wrapper.wrap(
            self.longest_command + self.prefix,
            &command.description_for(self.level),
            Some(&splice),
        );
        w.write(lines);

        for (flag, sentences) in &command.flags {
            let mut text = describe(sentences, self.level);
            if self.level == DetailLevel::Detailed {
                if let Some(value) = config.current_value(flag) {
                    text.push_str(" Current value: ");
                    text.push_str(&w.paint(&value, &config.accent));
                }
            }

            let label = pad_start(flag, self.flag_label_width());
            let splice = Splice::new(w.paint(&label, &config.subtitle), measure_text_width(&label))
                .at(self.flag_column());
            let lines = self.wrapper.wrap(self.flag_indent(), &text, Some(&splice));
            w.write(lines);
        }

        w.blank();
    }
}

fn banner(w: &mut Writer, config: &HelpConfig, wrapper: &LineWrapper) {
    let version = w.paint(&config.version, &config.accent);
    w.line(format!("{} (version: {})", config.name, version));
    w.blank();

    if let Some(description) = config.description.as_deref() {
        let lines: Vec<String> = wrapper
            .wrap(0, description, None)
            .iter()
            .map(|line| w.paint(line, &config.accent))
            .collect();
        w.write(lines);
        w.blank();
    }
}

fn examples(w: &mut Writer, config: &HelpConfig, command: &CommandSpec) {
    if command.examples.is_empty() {
        return;
    }

    w.header("Examples");
    for code in &command.examples {
        let painted = w.paint(code, &config.subtitle);
        w.example(&painted);
    }
    w.blank();
}

fn debugging(w: &mut Writer, config: &HelpConfig, name: &str, command: &CommandSpec) {
    let Some(namespace) = command.debug.as_deref() else {
        return;
    };

    w.header("Debugging");
    w.write(DEBUG_PROSE);
    w.blank();
    let invocation = format!("DEBUG={} {} {} ", namespace, config.name, name);
    let code = format!(
        "{}{}",
        w.paint(&invocation, &config.accent),
        w.paint(DEBUG_PLACEHOLDER, &config.subtitle)
    );
    w.example(&code);
    w.blank();
}

fn learn_more(w: &mut Writer, config: &HelpConfig) {
    let placeholder = w.paint(COMMAND_PLACEHOLDER, &config.accent);

    w.header("Learn More");
    w.line(LEARN_MORE_PROSE);
    w.blank();
    let code = format!(
        "{}{}",
        w.paint(&format!("{} help ", config.name), &config.subtitle),
        placeholder
    );
    w.example(&code);
    w.blank();
    w.line(format!(
        "Where {} is the command you want to learn more of.",
        placeholder
    ));
}
