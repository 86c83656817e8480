//! Credential source trait

/// Read-only source of the evaluation provider credential.
///
/// Implementations must re-read the underlying store on every call: the key
/// is process-wide configuration that may be set after startup, and a value
/// set late must still be observable.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialSource: Send + Sync {
    /// The Google API key, if one is configured. An empty value counts as
    /// unconfigured.
    fn google_api_key(&self) -> Option<String>;
}
