//! Infrastructure layer - concrete collaborators behind the domain traits

pub mod credentials;
pub mod logging;
pub mod workflow;

pub use credentials::EnvCredentialSource;
pub use workflow::GeminiWorkflow;
