//! Configuration management.
//!
//! Nothing is persisted; configuration comes from defaults, the process
//! environment and command-line flags, in increasing precedence.

use std::time::Duration;

/// Default chat-completion endpoint of the text-generation service.
pub const DEFAULT_ENDPOINT: &str = "https://models.inference.ai.azure.com/chat/completions";
/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Environment variable holding the bearer credential.
pub const DEFAULT_CREDENTIAL_VAR: &str = "GITHUB_TOKEN";
/// Simulated processing delay before a generation completes.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Settings for the optional text-generation collaborator.
#[derive(Clone)]
pub struct RemoteConfig {
    /// Chat-completion URL
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable the credential was read from
    pub credential_var: String,
    /// Bearer credential; `None` disables remote calls
    pub credential: Option<String>,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// How many layouts to ask the model for
    pub layouts_requested: usize,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            credential_var: DEFAULT_CREDENTIAL_VAR.to_string(),
            credential: None,
            temperature: 0.8,
            max_tokens: 1000,
            layouts_requested: 3,
        }
    }
}

impl RemoteConfig {
    /// Defaults with the credential read from [`DEFAULT_CREDENTIAL_VAR`].
    pub fn from_env() -> Self {
        Self::default().with_credential_from(DEFAULT_CREDENTIAL_VAR)
    }

    /// Read the credential from `var`. Blank values count as absent.
    pub fn with_credential_from(mut self, var: &str) -> Self {
        self.credential = std::env::var(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        self.credential_var = var.to_string();
        self
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("credential_var", &self.credential_var)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("layouts_requested", &self.layouts_requested)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const TEST_VAR: &str = "SKETCHPOT_TEST_CREDENTIAL";

    #[test]
    fn test_defaults_match_upstream() {
        let config = RemoteConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 1000);
        assert!(!config.has_credential());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_default_var() {
        let config = RemoteConfig::from_env();
        assert_eq!(config.credential_var, DEFAULT_CREDENTIAL_VAR);
        assert_eq!(
            config.has_credential(),
            std::env::var(DEFAULT_CREDENTIAL_VAR).is_ok_and(|v| !v.trim().is_empty())
        );
    }

    #[test]
    #[serial]
    fn test_credential_from_env() {
        std::env::set_var(TEST_VAR, "  secret-token ");
        let config = RemoteConfig::default().with_credential_from(TEST_VAR);
        std::env::remove_var(TEST_VAR);
        assert_eq!(config.credential.as_deref(), Some("secret-token"));
        assert_eq!(config.credential_var, TEST_VAR);
    }

    #[test]
    #[serial]
    fn test_blank_credential_is_absent() {
        std::env::set_var(TEST_VAR, "   ");
        let config = RemoteConfig::default().with_credential_from(TEST_VAR);
        std::env::remove_var(TEST_VAR);
        assert!(!config.has_credential());
    }

    #[test]
    #[serial]
    fn test_missing_credential() {
        std::env::remove_var(TEST_VAR);
        assert!(!RemoteConfig::default()
            .with_credential_from(TEST_VAR)
            .has_credential());
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = RemoteConfig {
            credential: Some("hunter2".to_string()),
            ..RemoteConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
