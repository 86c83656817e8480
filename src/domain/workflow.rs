//! Evaluation workflow trait

use async_trait::async_trait;

use super::evaluation::{WorkflowInput, WorkflowResult};
use super::DomainError;

/// The external essay evaluation pipeline.
///
/// Implementations are opaque to the caller: the orchestrator hands over a
/// [`WorkflowInput`], awaits a single invocation, and treats any failure the
/// same way. No retry or timeout is imposed at this seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EvaluationWorkflow: Send + Sync {
    /// Run one evaluation over the given input
    async fn invoke(&self, input: WorkflowInput) -> Result<WorkflowResult, DomainError>;
}
