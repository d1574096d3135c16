use crate::domain::AddressPolicyConfig;
use crate::ports::PolicyConfigProvider;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

// ============================================================================
// StaticPolicyProvider - Hardcoded policy for testing/development
// ============================================================================

/// Static policy provider with hardcoded values.
///
/// Useful for testing and development. For production, use `TomlPolicyProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticPolicyProvider {
    config: AddressPolicyConfig,
}

impl StaticPolicyProvider {
    /// Create with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with the specified policy.
    #[must_use]
    pub fn with_config(mut self, config: AddressPolicyConfig) -> Self {
        self.config = config;
        self
    }
}

impl PolicyConfigProvider for StaticPolicyProvider {
    fn get_policy_config(&self) -> AddressPolicyConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlPolicyProvider - Production policy loading
// ============================================================================

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    address_policy: AddressPolicyFile,
}

#[derive(Debug, Deserialize, Default)]
struct AddressPolicyFile {
    accept_unroutable: Option<bool>,
    accept_onion: Option<bool>,
}

/// TOML-based policy provider.
///
/// # Config File Format
///
/// ```toml
/// [address_policy]
/// accept_unroutable = false
/// accept_onion = true
/// ```
///
/// Missing keys fall back to `AddressPolicyConfig::default()`.
#[derive(Debug, Clone)]
pub struct TomlPolicyProvider {
    config: AddressPolicyConfig,
}

impl TomlPolicyProvider {
    /// Load the policy from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        let provider = Self::parse(&content)?;
        info!(
            path = %path.display(),
            accept_unroutable = provider.config.accept_unroutable,
            accept_onion = provider.config.accept_onion,
            "Loaded address policy"
        );
        Ok(provider)
    }

    /// Parse the policy from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let defaults = AddressPolicyConfig::default();
        let policy = file.address_policy;
        let config = AddressPolicyConfig {
            accept_unroutable: policy.accept_unroutable.unwrap_or(defaults.accept_unroutable),
            accept_onion: policy.accept_onion.unwrap_or(defaults.accept_onion),
        };

        Ok(Self { config })
    }
}

impl PolicyConfigProvider for TomlPolicyProvider {
    fn get_policy_config(&self) -> AddressPolicyConfig {
        self.config.clone()
    }
}

/// Errors that can occur during config loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read {path}: {error}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Error message from the I/O operation.
        error: String,
    },
    /// TOML parsing error.
    #[error("Failed to parse config: {0}")]
    Parse(String),
}
