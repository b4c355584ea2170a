//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `LWC_` prefix, `__` between nested keys,
//!    e.g. `LWC_GENERATOR__COMMAND=lwc-gen`
//! 3. Config file (`--config FILE`, else the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Which executor receives validated requests.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// External generator program. When unset, a hand-off manifest is
    /// written instead.
    pub command: Option<String>,
    /// Arguments passed to `command`.
    pub args: Vec<String>,
    /// Directory projects are created under.
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Clear the screen and greet before running the generator.
    pub banner: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            banner: true,
        }
    }
}

const ENV_PREFIX: &str = "LWC";

/// Keys whose environment value is a space-separated list.
const LIST_KEYS: [&str; 1] = ["generator.args"];

/// `LWC_GENERATOR__COMMAND=lwc-gen`, `LWC_GENERATOR__ARGS="--fast --quiet"`.
fn environment() -> config::Environment {
    LIST_KEYS.iter().fold(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(" "),
        |env, key| env.with_list_parse_key(key),
    )
}

impl AppConfig {
    /// Load configuration from file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    /// Load with `path` as the config file, optionally required.
    pub fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        Self::load_with_env(path, required, environment())
    }

    fn load_with_env(
        path: &Path,
        required: bool,
        env: config::Environment,
    ) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(required))
            .add_source(env)
            .build()
            .with_context(|| format!("reading configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("configuration has an unexpected shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.create-lwc-app.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "lwc", "create-lwc-app")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".create-lwc-app.toml"))
    }

    /// Look up a dotted key for `--config-get`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "generator.command" => Some(self.generator.command.clone().unwrap_or_default()),
            "generator.args" => Some(self.generator.args.join(" ")),
            "generator.output_dir" => Some(self.generator.output_dir.display().to_string()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.banner" => Some(self.output.banner.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_write_a_manifest_in_cwd() {
        let cfg = AppConfig::default();
        assert!(cfg.generator.command.is_none());
        assert_eq!(cfg.generator.output_dir, PathBuf::from("."));
        assert!(cfg.output.banner);
    }

    #[test]
    fn missing_optional_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.generator, GeneratorConfig::default());
    }

    #[test]
    fn missing_required_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[generator]\ncommand = \"lwc-gen\"\nargs = [\"--fast\"]\n\n[output]\nbanner = false"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.generator.command.as_deref(), Some("lwc-gen"));
        assert_eq!(cfg.generator.args, vec!["--fast".to_string()]);
        assert!(!cfg.output.banner);
        // untouched keys keep their defaults
        assert_eq!(cfg.generator.output_dir, PathBuf::from("."));
    }

    fn vars(pairs: &[(&str, &str)]) -> config::Environment {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn env_overrides_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let env = vars(&[
            ("LWC_GENERATOR__COMMAND", "lwc-gen"),
            ("LWC_GENERATOR__ARGS", "--fast --quiet"),
            ("LWC_GENERATOR__OUTPUT_DIR", "apps"),
            ("LWC_OUTPUT__BANNER", "false"),
            ("LWC_OUTPUT__NO_COLOR", "true"),
        ]);

        let cfg = AppConfig::load_with_env(&dir.path().join("absent.toml"), false, env).unwrap();
        assert_eq!(cfg.generator.command.as_deref(), Some("lwc-gen"));
        assert_eq!(cfg.generator.args, vec!["--fast", "--quiet"]);
        assert_eq!(cfg.generator.output_dir, PathBuf::from("apps"));
        assert!(!cfg.output.banner);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn single_env_arg_is_still_a_list() {
        let dir = tempfile::tempdir().unwrap();
        let env = vars(&[("LWC_GENERATOR__ARGS", "--fast")]);

        let cfg = AppConfig::load_with_env(&dir.path().join("absent.toml"), false, env).unwrap();
        assert_eq!(cfg.generator.args, vec!["--fast"]);
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("output.banner").as_deref(), Some("true"));
        assert_eq!(cfg.get("generator.command").as_deref(), Some(""));
        assert!(cfg.get("does.not.exist").is_none());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
