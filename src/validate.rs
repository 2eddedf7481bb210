use std::fmt::Display;

use tracing::debug;

/// Accepts any value whose text form is an optional `-` followed by decimal
/// digits and hands that text back unchanged. Length is not bounded.
pub(crate) fn numeric(name: &str, value: impl Display) -> Option<String> {
    let text = value.to_string();
    let digits = text.strip_prefix('-').unwrap_or(&text);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(text)
    } else {
        debug!(argument = name, value = %text, "not a numeric identifier");
        None
    }
}

pub(crate) fn slug<'a>(name: &str, value: &'a str) -> Option<&'a str> {
    if value.is_empty() {
        debug!(argument = name, "empty string argument");
        None
    } else {
        Some(value)
    }
}

pub(crate) fn token<'a>(value: Option<&'a str>) -> Option<&'a str> {
    match value {
        Some(token) if !token.is_empty() => Some(token),
        _ => {
            debug!("no access token configured for a token-authenticated endpoint");
            None
        }
    }
}

pub(crate) fn in_range(name: &str, value: i64, min: i64, max: i64) -> Option<i64> {
    if (min..=max).contains(&value) {
        Some(value)
    } else {
        debug!(argument = name, value, min, max, "argument out of range");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_accepts_numbers_and_numeric_text() {
        assert_eq!(numeric("id", 2144).as_deref(), Some("2144"));
        assert_eq!(numeric("id", "262").as_deref(), Some("262"));
        assert_eq!(numeric("id", "-3").as_deref(), Some("-3"));
    }

    #[test]
    fn numeric_rejects_everything_else() {
        assert_eq!(numeric("id", "abc"), None);
        assert_eq!(numeric("id", ""), None);
        assert_eq!(numeric("id", "12abc"), None);
        assert_eq!(numeric("id", " 12"), None);
        assert_eq!(numeric("id", "+5"), None);
        assert_eq!(numeric("id", "-"), None);
    }

    #[test]
    fn numeric_is_not_bounded_by_i64() {
        assert_eq!(
            numeric("id", "92233720368547758080").as_deref(),
            Some("92233720368547758080")
        );
    }

    #[test]
    fn slug_rejects_empty() {
        assert_eq!(slug("realm", ""), None);
        assert_eq!(slug("realm", "draenor"), Some("draenor"));
    }

    #[test]
    fn token_requires_text() {
        assert_eq!(token(None), None);
        assert_eq!(token(Some("")), None);
        assert_eq!(token(Some("abc")), Some("abc"));
    }

    #[test]
    fn range_is_inclusive() {
        assert_eq!(in_range("level", 1, 1, 25), Some(1));
        assert_eq!(in_range("level", 25, 1, 25), Some(25));
        assert_eq!(in_range("level", 26, 1, 25), None);
    }
}
