//! Flags that shape how `create-lwc-app` talks to the user, independent of
//! the project being requested.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing_subscriber::filter::LevelFilter;

/// Logging, colour, config-file and screen flags.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more. Without it only warnings and errors reach stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Log more (-v info, -vv debug, -vvv trace)",
        long_help = "Log more to stderr. RUST_LOG overrides this flag.
    (none)  - warnings and errors
    -v      - which executor runs, request summary
    -vv     - validation steps, manifest paths
    -vvv    - everything"
    )]
    pub verbose: u8,

    /// Print nothing but errors; no banner, no spinner.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes (also set by `NO_COLOR`).
    #[arg(long = "no-color", env = "NO_COLOR", help = "Disable colored output")]
    pub no_color: bool,

    /// Configuration file; must exist when given.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Read configuration from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    /// Screen handling around the generator run.
    #[arg(
        long = "screen",
        value_enum,
        default_value_t = Screen::Auto,
        help = "Screen handling: auto, interactive (clear + banner + spinner), plain"
    )]
    pub screen: Screen,
}

impl GlobalArgs {
    /// Log level picked by `-v` / `-q`; `--quiet` always wins.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// What happens on stdout around a generator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    /// `Interactive` when stdout is a terminal, `Plain` otherwise.
    #[default]
    Auto,
    /// Clear the screen, greet with the banner, spin while the executor runs.
    Interactive,
    /// Line-by-line status only; safe for pipes and CI logs.
    Plain,
}

impl Screen {
    /// Settle `Auto` against whether stdout is a terminal.
    pub fn resolve(self, stdout_is_terminal: bool) -> Self {
        match self {
            Self::Auto if stdout_is_terminal => Self::Interactive,
            Self::Auto => Self::Plain,
            other => other,
        }
    }
}
