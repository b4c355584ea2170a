//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole flow:
//! 1. Validate the raw input into a `ScaffoldRequest`
//! 2. Hand the request to the executor and await it
//!
//! Callers may do their own work between the two steps (the CLI shows its
//! welcome banner there), which is why they are separate methods.

use tracing::{error, info, instrument};

use crate::{
    application::ports::ScaffoldExecutor,
    domain::{RawInput, RequestValidator, ScaffoldRequest},
    error::{LwcError, LwcResult},
};

/// Main scaffolding service.
pub struct ScaffoldService {
    executor: Box<dyn ScaffoldExecutor>,
}

impl ScaffoldService {
    /// Create a new scaffold service around an executor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use async_trait::async_trait;
    /// use lwc_core::application::{ScaffoldExecutor, ScaffoldService};
    /// use lwc_core::domain::ScaffoldRequest;
    /// use lwc_core::error::LwcResult;
    ///
    /// struct Noop;
    ///
    /// #[async_trait]
    /// impl ScaffoldExecutor for Noop {
    ///     fn name(&self) -> &str {
    ///         "noop"
    ///     }
    ///
    ///     async fn run(&self, _request: &ScaffoldRequest) -> LwcResult<()> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let service = ScaffoldService::new(Box::new(Noop));
    /// assert_eq!(service.executor_name(), "noop");
    /// ```
    pub fn new(executor: Box<dyn ScaffoldExecutor>) -> Self {
        Self { executor }
    }

    /// Name of the executor requests are dispatched to.
    pub fn executor_name(&self) -> &str {
        self.executor.name()
    }

    /// Whether the executor takes over the terminal while it runs.
    pub fn executor_owns_terminal(&self) -> bool {
        self.executor.owns_terminal()
    }

    /// Validate raw input. Never touches the executor.
    #[instrument(skip_all)]
    pub fn prepare(&self, raw: &RawInput) -> LwcResult<ScaffoldRequest> {
        let request = RequestValidator::validate(raw).map_err(LwcError::Validation)?;
        info!(request = %request, options = request.options().len(), "Request validated");
        Ok(request)
    }

    /// Run the executor once for `request` and wait for it to finish.
    ///
    /// Taking the request by value means one validated request drives at
    /// most one executor run.
    #[instrument(skip_all, fields(executor = %self.executor.name(), request = %request))]
    pub async fn dispatch(&self, request: ScaffoldRequest) -> LwcResult<()> {
        info!("Dispatching scaffold request");

        match self.executor.run(&request).await {
            Ok(()) => {
                info!("Executor completed successfully");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Executor failed");
                Err(e)
            }
        }
    }

    /// `prepare` followed by `dispatch`.
    pub async fn scaffold(&self, raw: &RawInput) -> LwcResult<()> {
        let request = self.prepare(raw)?;
        self.dispatch(request).await
    }
}
