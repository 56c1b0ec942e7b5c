//! API base address resolution.
//!
//! The frontend prepends the API base to every relative request path. It is
//! taken from `VITE_API_URL` when that is set to a non-empty value and falls
//! back to [`DEFAULT_API_BASE`] otherwise. The value is not checked for URL
//! syntax; a malformed override is handed to callers unchanged.

use lazy_static::lazy_static;
use tracing::debug;

use crate::env::{lookup_or_default, EnvSource, ProcessEnv};

/// Name of the override variable
pub const API_BASE_ENV: &str = "VITE_API_URL";

/// Fallback used when no override is present
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// API base baked in at compile time from `VITE_API_URL`.
///
/// Follows the same empty-means-unset rule as [`struct@API_BASE`] but is
/// independent of it: the runtime value never consults this one.
pub const BUILD_API_BASE: &str = match option_env!("VITE_API_URL") {
    Some(url) if !url.is_empty() => url,
    _ => DEFAULT_API_BASE,
};

lazy_static! {
    /// API base for this process, resolved from the environment on first access.
    pub static ref API_BASE: String = resolve_api_base(&ProcessEnv);
}

/// Resolves the API base against `source`.
pub fn resolve_api_base<S: EnvSource + ?Sized>(source: &S) -> String {
    let (base, overridden) = lookup_or_default(source, API_BASE_ENV, DEFAULT_API_BASE);
    if overridden {
        debug!(source = API_BASE_ENV, api_base = %base, "API base taken from override");
    } else {
        debug!(api_base = %base, "API base using default");
    }
    base
}

/// Joins `base` and a relative `path` by plain concatenation.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

/// Joins [`struct@API_BASE`] and a relative `path`.
pub fn api_endpoint(path: &str) -> String {
    endpoint(&API_BASE, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_with(value: Option<&str>) -> HashMap<String, String> {
        let mut env = HashMap::new();
        if let Some(v) = value {
            env.insert(API_BASE_ENV.to_string(), v.to_string());
        }
        env
    }

    #[test]
    fn test_default_when_unset() {
        assert_eq!(resolve_api_base(&env_with(None)), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_override_used_verbatim() {
        assert_eq!(
            resolve_api_base(&env_with(Some("https://api.example.com"))),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_empty_override_falls_back() {
        assert_eq!(resolve_api_base(&env_with(Some(""))), DEFAULT_API_BASE);
    }

    #[test]
    fn test_override_not_normalized() {
        let raw = " https://api.example.com/v1/ ";
        assert_eq!(resolve_api_base(&env_with(Some(raw))), raw);
    }

    #[test]
    fn test_malformed_override_accepted() {
        assert_eq!(resolve_api_base(&env_with(Some("not a url"))), "not a url");
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut env = env_with(None);
        env.insert("API_URL".to_string(), "https://elsewhere".to_string());
        assert_eq!(resolve_api_base(&env), DEFAULT_API_BASE);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let env = env_with(Some("https://api.example.com"));
        assert_eq!(resolve_api_base(&env), resolve_api_base(&env));
    }

    #[test]
    fn test_api_base_is_stable() {
        let first: &str = &API_BASE;
        let second: &str = &API_BASE;
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_build_api_base_not_empty() {
        assert!(!BUILD_API_BASE.is_empty());
    }

    #[test]
    fn test_endpoint_concatenates() {
        assert_eq!(
            endpoint("http://127.0.0.1:8000", "/auth/login"),
            "http://127.0.0.1:8000/auth/login"
        );
        assert_eq!(endpoint("", "/health"), "/health");
    }

    #[test]
    fn test_api_endpoint_uses_api_base() {
        assert_eq!(api_endpoint("/health"), format!("{}/health", *API_BASE));
    }
}
