//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No validation lives here: `--type` and `--options` are
//! taken as raw comma-separated strings and checked by `lwc-core`.
//!
//! There are no subcommands. The positional `NAME` accepts any word, so
//! `create-lwc-app config -y` creates a project called `config`; the helper
//! actions are `--completions` and the `--config-*` flags instead.

use clap::{ArgGroup, Args, Parser, ValueEnum};

use lwc_core::domain::RawInput;

pub mod global;
use global::GlobalArgs;

/// Arg group holding the helper actions; at most one per invocation.
const TOOL_GROUP: &str = "tool";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a helper flag the arguments describe the project to create.
#[derive(Debug, Parser)]
#[command(
    name    = "create-lwc-app",
    bin_name = "create-lwc-app",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Create a Lightning Web Components app",
    long_about = "Validates the requested app type and options, then hands the \
                  project request to the configured generator.",
    after_help = "EXAMPLES:\n\
        \x20 create-lwc-app my-app\n\
        \x20 create-lwc-app my-app -y -o yarn,typescript\n\
        \x20 create-lwc-app my-app -y -t pwa -o rollup,express\n\
        \x20 create-lwc-app my-app -y -t cordova-ios,cordova-android\n\
        \x20 create-lwc-app --config-get generator.command\n\
        \x20 create-lwc-app --completions bash > /usr/share/bash-completion/completions/create-lwc-app",
    group(
        ArgGroup::new(TOOL_GROUP)
            .args(["completions", "config_path", "config_list", "config_get", "config_init"])
            .multiple(false)
    ),
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Project to create when no helper flag is given.
    #[command(flatten)]
    pub create: CreateArgs,

    #[command(flatten)]
    pub tools: ToolArgs,
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for creating a project.
#[derive(Debug, Args)]
#[group(skip)]
pub struct CreateArgs {
    /// Project name; any word is accepted.
    #[arg(value_name = "NAME", conflicts_with = TOOL_GROUP, help = "Project name")]
    pub name: Option<String>,

    /// Comma-separated feature options.
    #[arg(
        short = 'o',
        long = "options",
        value_name = "OPTIONS",
        conflicts_with = TOOL_GROUP,
        help = "Comma-separated options: yarn, typescript, edge, rollup, express (requires --yes)"
    )]
    pub options: Option<String>,

    /// Run without prompts.
    #[arg(
        short = 'y',
        long = "yes",
        conflicts_with = TOOL_GROUP,
        help = "Silent mode: take every setting from flags, never prompt"
    )]
    pub yes: bool,

    /// Comma-separated app types.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPES",
        conflicts_with = TOOL_GROUP,
        help = "App type: standard (default), pwa, or one or more of \
                cordova-ios, cordova-electron, cordova-android, cordova-mac"
    )]
    pub kind: Option<String>,
}

impl CreateArgs {
    /// Raw, unvalidated input for the core validator.
    pub fn to_raw_input(&self) -> RawInput {
        RawInput {
            name: self.name.clone(),
            options_csv: self.options.clone(),
            silent: self.yes,
            type_csv: self.kind.clone(),
        }
    }
}

// ── helper actions ────────────────────────────────────────────────────────────

/// Flags that replace project creation with a helper action.
#[derive(Debug, Args)]
#[group(skip)]
#[command(next_help_heading = "Helpers")]
pub struct ToolArgs {
    /// Print a completion script for SHELL.
    #[arg(long = "completions", value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,

    /// Print the configuration file path in use.
    #[arg(long = "config-path")]
    pub config_path: bool,

    /// Print the effective configuration.
    #[arg(long = "config-list")]
    pub config_list: bool,

    /// Print one configuration value, e.g. `generator.command`.
    #[arg(long = "config-get", value_name = "KEY")]
    pub config_get: Option<String>,

    /// Write a default configuration file.
    #[arg(long = "config-init")]
    pub config_init: bool,

    /// Let `--config-init` overwrite an existing file.
    #[arg(short = 'f', long = "force", requires = "config_init")]
    pub force: bool,
}

/// A helper action selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tool {
    Completions(Shell),
    Config(ConfigAction),
}

/// What to do with the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the value of a dotted key.
    Get { key: String },
    /// Print all configuration values.
    List,
    /// Print the path of the configuration file.
    Path,
    /// Write a default configuration file.
    Init { force: bool },
}

impl ToolArgs {
    /// The chosen helper action, or `None` to create a project.
    pub fn into_tool(self) -> Option<Tool> {
        if let Some(shell) = self.completions {
            return Some(Tool::Completions(shell));
        }
        let action = if let Some(key) = self.config_get {
            ConfigAction::Get { key }
        } else if self.config_list {
            ConfigAction::List
        } else if self.config_path {
            ConfigAction::Path
        } else if self.config_init {
            ConfigAction::Init { force: self.force }
        } else {
            return None;
        };
        Some(Tool::Config(action))
    }

    /// `--config-init` is the one action whose `--config FILE` may not exist.
    pub fn initialises_config(&self) -> bool {
        self.config_init
    }
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
