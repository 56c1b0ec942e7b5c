use std::collections::HashMap;

/// A place configuration overrides are read from.
pub trait EnvSource {
    /// Returns the raw value for `key`, or `None` when it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values count as unset
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Returns the override when it is present and non-empty, otherwise `default`.
///
/// The override is returned untouched: no trimming, no normalization.
pub fn override_or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

/// Looks up `key` in `source` and applies [`override_or_default`].
///
/// Returns the resolved value and whether the override won.
pub fn lookup_or_default<S: EnvSource + ?Sized>(
    source: &S,
    key: &str,
    default: &str,
) -> (String, bool) {
    let value = source.get(key).filter(|v| !v.is_empty());
    let overridden = value.is_some();
    (override_or_default(value, default), overridden)
}
