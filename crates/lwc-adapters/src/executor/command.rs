//! External generator process executor.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, instrument};

use lwc_core::{
    application::{ApplicationError, ports::ScaffoldExecutor},
    domain::ScaffoldRequest,
    error::{LwcError, LwcResult},
};

/// Environment variable carrying the JSON request to the generator.
pub const REQUEST_ENV: &str = "LWC_SCAFFOLD_REQUEST";

/// Runs an external generator program once per request.
///
/// The payload goes through [`REQUEST_ENV`] rather than stdin so the child
/// inherits the terminal and can prompt when the request is not silent.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

#[async_trait]
impl ScaffoldExecutor for CommandExecutor {
    fn name(&self) -> &str {
        &self.program
    }

    // stdio is inherited, so the generator may prompt.
    fn owns_terminal(&self) -> bool {
        true
    }

    #[instrument(skip_all, fields(program = %self.program))]
    async fn run(&self, request: &ScaffoldRequest) -> LwcResult<()> {
        let payload = serde_json::to_string(request).map_err(|e| LwcError::Internal {
            message: format!("failed to serialise request: {e}"),
        })?;

        let mut command = Command::new(&self.program);
        command.args(&self.args).env(REQUEST_ENV, &payload);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        debug!(args = ?self.args, "Spawning generator");
        let status = command
            .status()
            .await
            .map_err(|e| ApplicationError::ExecutorUnavailable {
                executor: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(ApplicationError::ExecutorFailed {
                executor: self.program.clone(),
                reason: format!("exited with {status}"),
            }
            .into());
        }

        info!("Generator finished");
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use lwc_core::domain::{RawInput, RequestValidator};

    fn request() -> ScaffoldRequest {
        let raw = RawInput::new()
            .with_name("proc-app")
            .with_options_csv("yarn")
            .silent(true);
        RequestValidator::validate(&raw).unwrap()
    }

    #[tokio::test]
    async fn successful_generator() {
        CommandExecutor::new("true").run(&request()).await.unwrap();
    }

    #[tokio::test]
    async fn failing_generator_is_executor_failure() {
        let err = CommandExecutor::new("false")
            .run(&request())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LwcError::Application(ApplicationError::ExecutorFailed { .. })
        ));
    }

    #[tokio::test]
    async fn missing_program_is_unavailable() {
        let err = CommandExecutor::new("definitely-not-a-real-generator-binary")
            .run(&request())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LwcError::Application(ApplicationError::ExecutorUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn payload_reaches_the_generator() {
        let dir = tempfile::tempdir().unwrap();
        let executor = CommandExecutor::new("sh")
            .with_args(["-c", "printf '%s' \"$LWC_SCAFFOLD_REQUEST\" > payload.json"])
            .with_working_dir(dir.path());

        executor.run(&request()).await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("payload.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["name"], "proc-app");
        assert_eq!(value["options"], serde_json::json!(["yarn"]));
        assert_eq!(value["type"], "standard");
    }

    #[test]
    fn generator_owns_the_terminal() {
        assert!(CommandExecutor::new("lwc-gen").owns_terminal());
    }
}
