//! Environment variable parsing with warn-level logging for invalid values.

use std::fmt::Display;
use std::str::FromStr;

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    parse_or_default(var, std::env::var(var).ok().as_deref(), default)
}

fn parse_or_default<T: FromStr + Display>(var: &str, raw: Option<&str>, default: T) -> T {
    let Some(v) = raw else {
        return default;
    };
    match v.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            tracing::warn!(var, value = %v, default = %default, "invalid env var value, using default");
            default
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_value() {
        let result: u32 = parse_or_default("IRONLOG_TEST", Some("42"), 10);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let result: u32 = parse_or_default("IRONLOG_TEST", Some(" 4 "), 10);
        assert_eq!(result, 4);
    }

    #[test]
    fn test_parse_invalid_value() {
        let result: u32 = parse_or_default("IRONLOG_TEST", Some("banana"), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_parse_missing_value() {
        let result: u32 = parse_or_default("IRONLOG_TEST", None, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_env_missing_var() {
        let result: u32 = env_parse_with_default("IRONLOG_TEST_MISSING_51723", 7);
        assert_eq!(result, 7);
    }
}
