//! Parsing helpers for raw query-string values.
//!
//! Query parameters arrive as strings. An empty value counts as absent so
//! that HTML forms submitting blank fields behave like omitted ones.

use crate::error::RestError;

/// Returns the trimmed value, or `None` when it is missing or blank.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a boolean flag.
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off` in any case.
pub(crate) fn parse_bool(name: &str, value: Option<String>) -> Result<Option<bool>, RestError> {
    let Some(value) = non_empty(value) else {
        return Ok(None);
    };

    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(invalid(name, &value, "expected a boolean")),
    }
}

/// Parses an integer parameter.
pub(crate) fn parse_int(name: &str, value: Option<String>) -> Result<Option<i64>, RestError> {
    let Some(value) = non_empty(value) else {
        return Ok(None);
    };

    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| invalid(name, &value, "expected an integer"))
}

fn invalid(name: &str, value: &str, expected: &str) -> RestError {
    RestError::BadRequest {
        message: format!("Invalid value '{}' for parameter '{}': {}", value, name, expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(some("  Italy ")), some("Italy"));
        assert_eq!(non_empty(some("   ")), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_parse_bool_spellings() {
        for value in ["true", "TRUE", "1", "yes", "On"] {
            assert_eq!(parse_bool("danger", some(value)).unwrap(), Some(true));
        }
        for value in ["false", "0", "No", "off"] {
            assert_eq!(parse_bool("danger", some(value)).unwrap(), Some(false));
        }
        assert_eq!(parse_bool("danger", some("")).unwrap(), None);
    }

    #[test]
    fn test_parse_bool_rejects_garbage() {
        let err = parse_bool("danger", some("maybe")).unwrap_err();
        assert!(err.to_string().contains("danger"));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("year_from", some("1978")).unwrap(), Some(1978));
        assert_eq!(parse_int("page", some("-2")).unwrap(), Some(-2));
        assert_eq!(parse_int("page", None).unwrap(), None);
        assert!(parse_int("page", some("two")).is_err());
    }
}
