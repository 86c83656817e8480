//! Domain layer - evaluation contract, traits, and errors

pub mod credentials;
pub mod error;
pub mod evaluation;
pub mod workflow;

pub use credentials::CredentialSource;
pub use error::DomainError;
pub use evaluation::{
    EvaluationLimits, EvaluationRequest, EvaluationResponse, WorkflowInput, WorkflowResult,
};
pub use workflow::EvaluationWorkflow;
