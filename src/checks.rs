use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use url::Url;

/// Regex for the literal `YYYY-MM-DD HH:mm:ss` timestamp shape.
///
/// Lexical only; calendar validity is checked separately so that e.g.
/// month 13 is rejected even though it matches the pattern.
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("timestamp regex must compile")
});

/// Parse format matching the registry's `submittedAt` convention.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns `true` if `value` is a well-formed `YYYY-MM-DD HH:mm:ss`
/// timestamp naming a real calendar date-time.
#[must_use]
pub fn is_valid_timestamp(value: &str) -> bool {
    TIMESTAMP_RE.is_match(value)
        && NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).is_ok()
}

/// Returns `true` if `value` parses as an absolute URL with an authority
/// (scheme + host at minimum). Malformed input is a negative result, never
/// an error.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── timestamp ────────────────────────────────────────────────────

    #[test]
    fn timestamp_valid() {
        assert!(is_valid_timestamp("2025-01-19 10:00:00"));
    }

    #[test]
    fn timestamp_midnight_and_end_of_day() {
        assert!(is_valid_timestamp("2024-12-31 00:00:00"));
        assert!(is_valid_timestamp("2024-12-31 23:59:59"));
    }

    #[test]
    fn timestamp_invalid_month_rejected() {
        // Matches the lexical pattern but is not a real date.
        assert!(!is_valid_timestamp("2025-13-01 00:00:00"));
    }

    #[test]
    fn timestamp_invalid_day_rejected() {
        assert!(!is_valid_timestamp("2025-01-32 00:00:00"));
    }

    #[test]
    fn timestamp_invalid_hour_rejected() {
        assert!(!is_valid_timestamp("2025-01-19 24:00:00"));
    }

    #[test]
    fn timestamp_wrong_separator_rejected() {
        assert!(!is_valid_timestamp("2025/01/19 10:00:00"));
    }

    #[test]
    fn timestamp_iso_t_separator_rejected() {
        assert!(!is_valid_timestamp("2025-01-19T10:00:00"));
    }

    #[test]
    fn timestamp_missing_seconds_rejected() {
        assert!(!is_valid_timestamp("2025-01-19 10:00"));
    }

    #[test]
    fn timestamp_trailing_garbage_rejected() {
        assert!(!is_valid_timestamp("2025-01-19 10:00:00 UTC"));
    }

    #[test]
    fn timestamp_empty_rejected() {
        assert!(!is_valid_timestamp(""));
    }

    #[test]
    fn timestamp_leap_day() {
        assert!(is_valid_timestamp("2024-02-29 12:00:00"));
        assert!(!is_valid_timestamp("2025-02-29 12:00:00"));
    }

    // ── url ──────────────────────────────────────────────────────────

    #[test]
    fn url_https_accepted() {
        assert!(is_valid_url("https://github.com/org/repo"));
    }

    #[test]
    fn url_with_path_and_query_accepted() {
        assert!(is_valid_url("https://example.com/a/b?x=1"));
    }

    #[test]
    fn url_plain_text_rejected() {
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn url_relative_rejected() {
        assert!(!is_valid_url("/just/a/path"));
    }

    #[test]
    fn url_missing_host_rejected() {
        // Scheme alone is not enough; an authority is required.
        assert!(!is_valid_url("data:text/plain,hello"));
    }

    #[test]
    fn url_empty_rejected() {
        assert!(!is_valid_url(""));
    }
}
