//! Environment variable parsing with warn-level logging for invalid values.

/// Catalog location override (file path or http(s) URL).
pub const CATALOG_ENV: &str = "API_EXPLORER_CATALOG";

/// Data directory override for persisted bookmarks.
pub const DATA_DIR_ENV: &str = "API_EXPLORER_DATA_DIR";

/// Search debounce override, in milliseconds.
pub const DEBOUNCE_MS_ENV: &str = "API_EXPLORER_DEBOUNCE_MS";

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a non-empty string environment variable.
///
/// Whitespace-only values count as unset.
#[must_use]
pub fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    // SAFETY (all tests): env mutation is serialized through `env_lock` and
    // each test uses a variable name no other code reads.

    #[test]
    fn test_env_parse_valid_value() {
        let _guard = env_lock().lock().expect("lock");
        let var_name = "TEST_API_EXPLORER_PARSE_VALID";
        unsafe { std::env::set_var(var_name, "42") };
        let result: u64 = env_parse_with_default(var_name, 300);
        assert_eq!(result, 42);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let _guard = env_lock().lock().expect("lock");
        let var_name = "TEST_API_EXPLORER_PARSE_INVALID";
        unsafe { std::env::set_var(var_name, "soon") };
        let result: u64 = env_parse_with_default(var_name, 300);
        assert_eq!(result, 300);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var() {
        let _guard = env_lock().lock().expect("lock");
        let var_name = "TEST_API_EXPLORER_PARSE_MISSING";
        unsafe { std::env::remove_var(var_name) };
        let result: u64 = env_parse_with_default(var_name, 300);
        assert_eq!(result, 300);
    }

    #[test]
    fn test_env_non_empty_treats_blank_as_unset() {
        let _guard = env_lock().lock().expect("lock");
        let var_name = "TEST_API_EXPLORER_NON_EMPTY";
        unsafe { std::env::set_var(var_name, "   ") };
        assert_eq!(env_non_empty(var_name), None);
        unsafe { std::env::set_var(var_name, " ./apis.json ") };
        assert_eq!(env_non_empty(var_name).as_deref(), Some("./apis.json"));
        unsafe { std::env::remove_var(var_name) };
    }
}
