//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, Screen};
use crate::config::AppConfig;

const BANNER: &str = r"
   __                   __
  / /__      _____     / /_ _ ___  ___
 / /| | /| / / __/    /  _ `/ _ \/ _ \
/_/ |__/|__/\__/     /_/ \_,_/ .__/ .__/
                            /_/  /_/";

/// Manages CLI output based on configuration.
pub struct OutputManager {
    screen: Screen,
    quiet: bool,
    no_color: bool,
    banner: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            screen: args.screen.resolve(io::stdout().is_terminal()),
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            banner: config.output.banner,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Clear the screen and print the welcome banner.
    ///
    /// Only happens on an interactive screen with the banner enabled; the
    /// screen is cleared only when stdout is a real terminal.
    pub fn welcome(&self) -> io::Result<()> {
        if !self.shows_banner() {
            return Ok(());
        }
        if self.term.is_term() {
            self.term.clear_screen()?;
        }
        let banner = if self.no_color {
            BANNER.to_owned()
        } else {
            BANNER.magenta().bold().to_string()
        };
        self.term.write_line(&banner)?;
        self.term.write_line("")?;
        self.term
            .write_line(&format!("  Welcome to create-lwc-app v{}", env!("CARGO_PKG_VERSION")))?;
        self.term.write_line("")
    }

    /// A spinner for the generator run.
    ///
    /// Hidden unless the screen is interactive, and always hidden when the
    /// executor hands the terminal to a child process: its prompts must not
    /// be redrawn over.
    pub fn spinner(&self, msg: &str, executor_owns_terminal: bool) -> ProgressBar {
        if self.quiet || executor_owns_terminal || self.screen != Screen::Interactive {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner());
        pb.set_message(msg.to_owned());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if `welcome` will print anything.
    pub fn shows_banner(&self) -> bool {
        self.banner && !self.quiet && self.screen == Screen::Interactive
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool, screen: Screen) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            screen,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, Screen::Plain);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(make_manager(false, false, Screen::Plain).supports_color());
        assert!(!make_manager(false, true, Screen::Plain).supports_color());
    }

    #[test]
    fn banner_only_for_human_output() {
        assert!(make_manager(false, true, Screen::Interactive).shows_banner());
        assert!(!make_manager(false, true, Screen::Plain).shows_banner());
        assert!(!make_manager(true, true, Screen::Interactive).shows_banner());
    }

    #[test]
    fn banner_can_be_disabled_in_config() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            screen: Screen::Interactive,
        };
        let mut config = AppConfig::default();
        config.output.banner = false;
        assert!(!OutputManager::new(&args, &config).shows_banner());
    }

    #[test]
    fn spinner_hidden_for_plain_output() {
        let out = make_manager(false, true, Screen::Plain);
        assert!(out.spinner("working", false).is_hidden());
    }

    #[test]
    fn spinner_never_draws_over_a_generator_prompt() {
        let out = make_manager(false, true, Screen::Interactive);
        assert!(out.spinner("working", true).is_hidden());
    }
}
