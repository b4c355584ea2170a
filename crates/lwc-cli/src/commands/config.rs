//! `--config-get`, `--config-list`, `--config-path` and `--config-init`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    cli::ConfigAction,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Run one configuration action.
///
/// `config_file` is the `--config` override; `Path` and `Init` act on it
/// when given, otherwise on the platform default.
#[instrument(skip_all)]
pub fn execute(
    action: ConfigAction,
    config_file: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = config_file.unwrap_or_else(AppConfig::config_path);

    match action {
        ConfigAction::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value:?}"))?;
        }

        ConfigAction::List => {
            output.header("Current Configuration:")?;
            output.print(&render(&config)?)?;
        }

        ConfigAction::Path => {
            output.print(&path.display().to_string())?;
        }

        ConfigAction::Init { force } => {
            if path.exists() && !force {
                output.warning(&format!(
                    "{} already exists; pass --force with --config-init to overwrite",
                    path.display()
                ))?;
                return Ok(());
            }
            write_default(&path)?;
            info!(path = %path.display(), "Wrote default configuration");
            output.success(&format!("Wrote {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    })
}

fn render(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

fn write_default(path: &Path) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render(&AppConfig::default())?)?;
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "generator.output_dir").unwrap(), ".");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn default_config_reloads_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        write_default(&path).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }
}
