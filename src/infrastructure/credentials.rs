//! Environment-backed credential source

use std::env;

use crate::domain::CredentialSource;

pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Credential source that reads from an environment variable on every call,
/// so a key exported after the process started is still seen.
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    var: String,
}

impl EnvCredentialSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentialSource {
    fn default() -> Self {
        Self::new(GOOGLE_API_KEY_VAR)
    }
}

impl CredentialSource for EnvCredentialSource {
    fn google_api_key(&self) -> Option<String> {
        env::var(&self.var).ok().filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_key_from_environment() {
        // SAFETY: Test runs in isolation
        unsafe { env::set_var("TEST_GOOGLE_KEY_SET", "test-api-key") };

        let source = EnvCredentialSource::new("TEST_GOOGLE_KEY_SET");
        assert_eq!(source.google_api_key(), Some("test-api-key".to_string()));

        // SAFETY: Test cleanup
        unsafe { env::remove_var("TEST_GOOGLE_KEY_SET") };
    }

    #[test]
    fn test_missing_variable_is_none() {
        let source = EnvCredentialSource::new("TEST_GOOGLE_KEY_UNSET_12345");
        assert_eq!(source.google_api_key(), None);
    }

    #[test]
    fn test_empty_value_counts_as_unconfigured() {
        // SAFETY: Test runs in isolation
        unsafe { env::set_var("TEST_GOOGLE_KEY_EMPTY", "") };

        let source = EnvCredentialSource::new("TEST_GOOGLE_KEY_EMPTY");
        assert_eq!(source.google_api_key(), None);

        // SAFETY: Test cleanup
        unsafe { env::remove_var("TEST_GOOGLE_KEY_EMPTY") };
    }
}
