//! Recording executor for tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use lwc_core::{
    application::{ApplicationError, ports::ScaffoldExecutor},
    domain::ScaffoldRequest,
    error::LwcResult,
};

/// Keeps every request it receives; optionally fails each run.
///
/// Clones share the recorded list.
#[derive(Debug, Clone, Default)]
pub struct MemoryExecutor {
    received: Arc<Mutex<Vec<ScaffoldRequest>>>,
    failure: Option<String>,
}

impl MemoryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// An executor whose runs fail with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Requests received so far, in order.
    pub fn received(&self) -> Vec<ScaffoldRequest> {
        self.received
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ScaffoldExecutor for MemoryExecutor {
    fn name(&self) -> &str {
        "memory"
    }

    async fn run(&self, request: &ScaffoldRequest) -> LwcResult<()> {
        self.received
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(request.clone());

        match &self.failure {
            Some(reason) => Err(ApplicationError::ExecutorFailed {
                executor: "memory".into(),
                reason: reason.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}
