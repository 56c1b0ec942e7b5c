// Error types module
pub mod error;

// Environment lookup
pub mod env;

// Frontend API base address
pub mod api_base;

// Redaction API server settings
pub mod backend;

use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export commonly used types
pub use api_base::{
    api_endpoint, endpoint, resolve_api_base, API_BASE, API_BASE_ENV, BUILD_API_BASE,
    DEFAULT_API_BASE,
};
pub use backend::BackendSettings;
pub use env::{override_or_default, EnvSource, ProcessEnv};
pub use error::{ConfigError, Result};

/// Prefix for environment variables overlaid onto settings files
pub const ENV_PREFIX: &str = "FRS";

/// A settings struct that can be loaded from a file.
pub trait Settings: for<'de> Deserialize<'de> + Validate {
    /// Apply overrides that take precedence over the file and `FRS_*` layers.
    ///
    /// Runs after deserialization and before validation.
    fn apply_overrides<S: EnvSource + ?Sized>(&mut self, _source: &S) {}
}

/// Frontend client configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClientConfig {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub api_base: String,
    #[validate(length(min = 1))]
    pub service_name: String,
    #[validate(length(min = 1))]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            service_name: "frs-frontend".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Default client configuration with the API base taken from the process environment
    pub fn from_env() -> Self {
        Self {
            api_base: resolve_api_base(&ProcessEnv),
            ..Self::default()
        }
    }
}

impl Settings for ClientConfig {
    /// A non-empty `VITE_API_URL` wins over the file; an empty or missing
    /// file value falls back to [`DEFAULT_API_BASE`].
    fn apply_overrides<S: EnvSource + ?Sized>(&mut self, source: &S) {
        let file_value = std::mem::take(&mut self.api_base);
        self.api_base = match source.get(API_BASE_ENV).filter(|v| !v.is_empty()) {
            Some(value) => value,
            None => override_or_default(Some(file_value), DEFAULT_API_BASE),
        };
    }
}

impl Settings for BackendSettings {}

/// Load configuration from file, overlaid with `FRS_*` environment variables
pub fn load_config<T: Settings>(path: &str) -> Result<T> {
    load_config_with(path, &ProcessEnv)
}

/// Load configuration from file, taking overrides from `source`.
///
/// Empty `FRS_*` variables are ignored rather than blanking the file value.
pub fn load_config_with<T, S>(path: &str, source: &S) -> Result<T>
where
    T: Settings,
    S: EnvSource + ?Sized,
{
    let config: T = config::Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).ignore_empty(true))
        .build()
        .map_err(|e| ConfigError::LoadError(e.to_string()))?
        .try_deserialize()
        .map_err(|e| ConfigError::LoadError(e.to_string()))?;

    finish(config, source)
}

/// Load configuration from YAML string
pub fn load_from_yaml<T: Settings>(yaml: &str) -> Result<T> {
    load_from_yaml_with(yaml, &ProcessEnv)
}

/// Load configuration from YAML string, taking overrides from `source`
pub fn load_from_yaml_with<T, S>(yaml: &str, source: &S) -> Result<T>
where
    T: Settings,
    S: EnvSource + ?Sized,
{
    let config: T =
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::LoadError(e.to_string()))?;
    finish(config, source)
}

fn finish<T, S>(mut config: T, source: &S) -> Result<T>
where
    T: Settings,
    S: EnvSource + ?Sized,
{
    config.apply_overrides(source);
    config.validate()?;
    Ok(config)
}
