use std::env;

/// Set or clear a variable before the first read of any process-wide setting.
///
/// Each integration test file runs in its own process, so a file that calls
/// this must keep its environment-dependent assertions in a single test.
pub fn set_env(key: &str, value: Option<&str>) {
    frs_logging::init_test();
    match value {
        Some(v) => env::set_var(key, v),
        None => env::remove_var(key),
    }
}
