//! Application state for shared services

use std::sync::Arc;

use crate::domain::{CredentialSource, EvaluationLimits, EvaluationWorkflow};

/// Application state containing shared services using dynamic dispatch.
///
/// Nothing here is mutable across requests: the workflow and credential
/// source are read-only handles, so concurrent requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<dyn EvaluationWorkflow>,
    pub credentials: Arc<dyn CredentialSource>,
    pub limits: EvaluationLimits,
}

impl AppState {
    pub fn new(
        workflow: Arc<dyn EvaluationWorkflow>,
        credentials: Arc<dyn CredentialSource>,
        limits: EvaluationLimits,
    ) -> Self {
        Self {
            workflow,
            credentials,
            limits,
        }
    }
}
