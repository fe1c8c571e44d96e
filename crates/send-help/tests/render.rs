//! End-to-end rendering of complete help pages.

use send_help::{render, render_with_painter, CommandSpec, Commands, HelpConfig, HelpError};

fn npm_commands() -> Commands {
    let mut commands = Commands::new();
    commands.insert(
        "publish".into(),
        CommandSpec::new([
            "Publish your package.",
            "In-depth description here about the given command.",
        ])
        .example("npm publish")
        .debug("npm*")
        .flag("--registry", ["Configures the registry.", "Additional details."]),
    );
    commands
}

fn npm_config() -> HelpConfig {
    HelpConfig::new("npm")
        .version("1.2.3")
        .description("npm client as example")
        .accent("#EA2039")
        .flag_value("registry", "https://registry.npmjs.org/")
}

#[test]
fn test_summary_page() {
    let output = render(&npm_commands(), &npm_config()).unwrap();

    let expected = [
        "npm (version: 1.2.3)",
        "",
        "npm client as example",
        "",
        "COMMANDS:",
        "",
        "publish  Publish your package.",
        "         --registry  Configures the registry.",
        "",
        "LEARN MORE:",
        "",
        "Each command has additional information available, you can find this by running:",
        "",
        "  $ npm help <command>",
        "",
        "Where <command> is the command you want to learn more of.",
    ]
    .join("\n");

    assert_eq!(output, expected);
}

#[test]
fn test_detailed_page() {
    let output = render(&npm_commands(), &npm_config().specific("publish")).unwrap();

    let expected = [
        "npm (version: 1.2.3)",
        "",
        "npm client as example",
        "",
        "COMMAND:",
        "",
        "publish  Publish your package. In-depth description here about the given",
        "         command.",
        "         --registry  Configures the registry. Additional details. Current",
        "                     value: https://registry.npmjs.org/",
        "",
        "EXAMPLES:",
        "",
        "  $ npm publish",
        "",
        "DEBUGGING:",
        "",
        "This command is introspected with either `diagnostics` or `debug` to provide",
        "additional debugging information. This output can be enabled by setting the",
        "appropriate DEBUG environment flag before you run the command:",
        "",
        "  $ DEBUG=npm* npm publish # The rest of your CLI flags here",
        "",
    ]
    .join("\n");

    assert_eq!(output, expected);
    assert!(!output.contains("LEARN MORE:"));
}

#[test]
fn test_summary_hides_current_values_and_examples() {
    let output = render(&npm_commands(), &npm_config()).unwrap();
    assert!(!output.contains("Current value"));
    assert!(!output.contains("Additional details."));
    assert!(!output.contains("EXAMPLES:"));
    assert!(!output.contains("DEBUGGING:"));
}

#[test]
fn test_default_version() {
    let output = render(&npm_commands(), &HelpConfig::new("npm")).unwrap();
    assert!(output.starts_with("npm (version: 0.0.0)\n\nCOMMANDS:\n"));
}

#[test]
fn test_unknown_specific_command_renders_headers_only() {
    let output = render(&npm_commands(), &npm_config().specific("unpublish")).unwrap();

    let expected = [
        "npm (version: 1.2.3)",
        "",
        "npm client as example",
        "",
        "COMMAND:",
        "",
    ]
    .join("\n");

    assert_eq!(output, expected);
}

#[test]
fn test_empty_commands() {
    let output = render(&Commands::new(), &npm_config()).unwrap();
    assert!(output.contains("COMMANDS:\n\nLEARN MORE:"));
}

#[test]
fn test_command_without_flags_or_extras() {
    let mut commands = Commands::new();
    commands.insert("whoami".into(), CommandSpec::new(["Display npm username."]));

    let output = render(&commands, &npm_config().specific("whoami")).unwrap();
    assert!(output.ends_with("COMMAND:\n\nwhoami  Display npm username.\n"));
}

#[test]
fn test_multiple_commands_share_columns() {
    let mut commands = npm_commands();
    commands.insert(
        "ls".into(),
        CommandSpec::new(["List installed packages."]).flag("--json", ["Output JSON."]),
    );

    let summary = render(&commands, &npm_config()).unwrap();
    assert!(summary.contains("\npublish  Publish your package.\n"));
    assert!(summary.contains("\nls       List installed packages.\n"));
    assert!(summary.contains("\n         --registry  Configures the registry.\n"));
    assert!(summary.contains("\n             --json  Output JSON.\n"));

    // Columns are computed over every command, not just the selected one.
    let detail = render(&commands, &npm_config().specific("ls")).unwrap();
    assert!(detail.contains("\nls       List installed packages.\n"));
    assert!(detail.contains("\n             --json  Output JSON.\n"));
    assert!(!detail.contains("publish  "));
}

#[test]
fn test_short_flag_right_aligns_to_command_column() {
    let mut commands = Commands::new();
    commands.insert(
        "publish".into(),
        CommandSpec::new(["Publish your package."]).flag("-v", ["Verbose."]),
    );

    let output = render(&commands, &HelpConfig::new("npm")).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[4], "publish  Publish your package.");
    assert_eq!(lines[5], "                -v  Verbose.");
}

#[test]
fn test_short_flags_share_one_column() {
    let mut commands = Commands::new();
    commands.insert(
        "publish".into(),
        CommandSpec::new(["Publish your package."])
            .flag("-v", ["Verbose."])
            .flag("--tag", ["Dist tag."]),
    );

    let output = render(&commands, &HelpConfig::new("npm")).unwrap();
    assert!(output.contains("\n                -v  Verbose.\n"));
    assert!(output.contains("\n             --tag  Dist tag.\n"));
}

#[test]
fn test_oversized_prefix_is_rejected() {
    let config = HelpConfig::new("npm").prefix(usize::MAX / 2 + 1);
    let err = render(&npm_commands(), &config).unwrap_err();
    assert!(matches!(err, HelpError::InvalidLayout { .. }));

    let config = HelpConfig::new("npm").width(usize::MAX).prefix(usize::MAX);
    let err = render(&npm_commands(), &config).unwrap_err();
    assert!(matches!(err, HelpError::InvalidLayout { .. }));
}

#[test]
fn test_negated_flag_shows_current_value() {
    let mut commands = Commands::new();
    commands.insert(
        "install".into(),
        CommandSpec::new(["Install a package."]).flag("--no-audit", ["Skip the audit."]),
    );

    let config = HelpConfig::new("npm").flag_value("audit", true).specific("install");
    let output = render(&commands, &config).unwrap();
    assert!(output.contains("--no-audit  Skip the audit. Current value: true"));
}

#[test]
fn test_colors_paint_labels() {
    let output = render(&npm_commands(), &npm_config().colors(true)).unwrap();

    assert!(output.contains("\x1b["));
    let plain = console::strip_ansi_codes(&output);
    let uncolored = render(&npm_commands(), &npm_config()).unwrap();
    assert_eq!(plain, uncolored);
}

#[test]
fn test_custom_painter() {
    let tags = |text: &str, color: &str| format!("[{color}]{text}[/{color}]");
    let config = HelpConfig::new("npm").version("1.2.3").subtitle("gray");

    let output = render_with_painter(&npm_commands(), &config, Box::new(tags)).unwrap();
    assert!(output.starts_with("npm (version: [orange]1.2.3[/orange])"));
    assert!(output.contains("[orange]publish[/orange]  Publish your package."));
    assert!(output.contains("  $ [gray]npm help [/gray][orange]<command>[/orange]"));
}

#[test]
fn test_custom_width_wraps_earlier() {
    let config = npm_config().width(30);
    let output = render(&npm_commands(), &config).unwrap();
    assert!(output.contains("\npublish  Publish your package.\n"));
    assert!(output.contains("\n         --registry  Configures\n"));
    assert!(output.contains("\n                     the\n"));
}

#[test]
fn test_invalid_command_is_rejected() {
    let mut commands = npm_commands();
    commands.insert("broken".into(), CommandSpec::default());

    let err = render(&commands, &npm_config()).unwrap_err();
    assert!(matches!(err, HelpError::EmptyDescription { .. }));
}
