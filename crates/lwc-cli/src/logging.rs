//! Tracing subscriber for the `create-lwc-app` binary.
//!
//! `lwc-core` and `lwc-adapters` only emit events; the level chosen by
//! [`GlobalArgs::log_level`] is applied to exactly those crates and this
//! one, so dependency noise (clap, config) stays out of stderr. `RUST_LOG`
//! replaces the whole filter when set.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::global::GlobalArgs;

/// Crates whose events reach stderr.
const CRATES: [&str; 3] = ["create_lwc_app", "lwc_core", "lwc_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(directives(args.log_level())),
    };

    // Logs share stderr with the generator's prompts; keep them compact.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    CRATES.map(|krate| format!("{krate}={level}")).join(",")
}
