use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::env::{lookup_or_default, EnvSource, ProcessEnv};
use crate::error::{ConfigError, Result};

pub const PORT_ENV: &str = "PORT";
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE_PATH: &str = "app.db";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Settings the redaction API server starts with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BackendSettings {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,
    #[validate(length(min = 1))]
    pub database_path: String,
    #[validate(length(min = 1))]
    pub upload_dir: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            upload_dir: DEFAULT_UPLOAD_DIR.to_string(),
        }
    }
}

impl BackendSettings {
    /// Resolve settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_source(&ProcessEnv)
    }

    /// Resolve settings from `source`, falling back to defaults for unset or empty keys.
    ///
    /// An empty `DATABASE_PATH` or `PORT` counts as unset, the same rule
    /// `VITE_API_URL` follows, so an empty `DATABASE_PATH` yields `app.db`
    /// rather than an empty path.
    pub fn from_source<S: EnvSource + ?Sized>(source: &S) -> Result<Self> {
        let port = match source.get(PORT_ENV).filter(|v| !v.is_empty()) {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let (database_path, db_overridden) =
            lookup_or_default(source, DATABASE_PATH_ENV, DEFAULT_DATABASE_PATH);

        let settings = Self {
            host: DEFAULT_HOST.to_string(),
            port,
            database_path,
            upload_dir: DEFAULT_UPLOAD_DIR.to_string(),
        };
        settings.validate()?;

        debug!(
            port = settings.port,
            database_path = %settings.database_path,
            database_path_overridden = db_overridden,
            "Resolved backend settings"
        );
        Ok(settings)
    }

    /// Address the server binds to, as `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        key: PORT_ENV.to_string(),
        value: raw.to_string(),
        reason,
    };
    let port: u16 = raw.parse().map_err(|e| invalid(format!("{}", e)))?;
    if port == 0 {
        return Err(invalid("port must be between 1 and 65535".to_string()));
    }
    Ok(port)
}
