//! The default flow: validate the request, greet, run the generator.
//!
//! Validation happens before anything is printed, so a rejected request
//! never clears the screen or starts the generator.

use tracing::{debug, instrument};

use lwc_adapters::{CommandExecutor, LocalFilesystem, ManifestExecutor};
use lwc_core::application::{ScaffoldExecutor, ScaffoldService};

use crate::{cli::CreateArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Execute the create flow.
///
/// 1. Validate the raw arguments into a `ScaffoldRequest`
/// 2. Clear the screen and print the welcome banner
/// 3. Run the configured executor once and wait for it
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("")))]
pub async fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = ScaffoldService::new(build_executor(&config));

    let request = service.prepare(&args.to_raw_input())?;
    debug!(request = %request, "Request accepted");

    output.welcome()?;
    output.info(&format!(
        "Creating {} with {}",
        request,
        service.executor_name()
    ))?;

    let spinner = output.spinner("Generating project...", service.executor_owns_terminal());
    let result = service.dispatch(request).await;
    spinner.finish_and_clear();
    result?;

    output.success("Project request completed")?;
    Ok(())
}

/// Pick the executor named by configuration.
///
/// A configured `generator.command` runs as a child process; otherwise the
/// request is written as a manifest under `generator.output_dir`.
fn build_executor(config: &AppConfig) -> Box<dyn ScaffoldExecutor> {
    let generator = &config.generator;
    match &generator.command {
        Some(program) if !program.trim().is_empty() => Box::new(
            CommandExecutor::new(program.clone())
                .with_args(generator.args.iter().cloned())
                .with_working_dir(generator.output_dir.clone()),
        ),
        _ => Box::new(ManifestExecutor::new(
            LocalFilesystem::new(),
            generator.output_dir.clone(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_is_the_default_executor() {
        let executor = build_executor(&AppConfig::default());
        assert_eq!(executor.name(), "manifest");
        assert!(!executor.owns_terminal());
    }

    #[test]
    fn configured_command_is_used() {
        let mut config = AppConfig::default();
        config.generator.command = Some("lwc-gen".into());
        let executor = build_executor(&config);
        assert_eq!(executor.name(), "lwc-gen");
        // the generator may prompt, so no spinner is drawn over it
        assert!(executor.owns_terminal());
    }

    #[test]
    fn blank_command_falls_back_to_manifest() {
        let mut config = AppConfig::default();
        config.generator.command = Some("  ".into());
        assert_eq!(build_executor(&config).name(), "manifest");
    }
}
