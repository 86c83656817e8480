//! UPSC Essay Rating API
//!
//! A small HTTP service that accepts essay text and returns structured
//! feedback and scores from an external, model-backed evaluation workflow.
//! The crate's real job is the boundary contract around that workflow:
//! ordered precondition checks, a single opaque invocation, and field-by-field
//! shaping of its loosely-structured output into a fixed JSON response.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::AppState;
use domain::{CredentialSource, EvaluationLimits, EvaluationWorkflow};
use infrastructure::{EnvCredentialSource, GeminiWorkflow};

/// Create the application state with the default collaborators: the
/// environment-backed credential source and the Gemini evaluation workflow
pub fn create_app_state(config: &AppConfig) -> AppState {
    let credentials: Arc<dyn CredentialSource> = Arc::new(EnvCredentialSource::default());

    let workflow: Arc<dyn EvaluationWorkflow> = Arc::new(GeminiWorkflow::new(
        credentials.clone(),
        &config.evaluation.model,
    ));

    AppState::new(
        workflow,
        credentials,
        EvaluationLimits {
            min_words: config.evaluation.min_words,
        },
    )
}
