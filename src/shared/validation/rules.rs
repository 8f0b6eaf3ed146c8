use chrono::NaiveDate;
use email_address::EmailAddress;
use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(https?://)?([a-z0-9]([a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}(:\d{1,5})?(/[^\s]*)?$")
        .expect("URL pattern is valid")
});

static HANDLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("handle pattern is valid"));

pub fn is_blank(value: Option<&str>) -> bool {
    value.map(|v| v.trim().is_empty()).unwrap_or(true)
}

/// Character-count bounds, inclusive, measured on the trimmed value.
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.trim().chars().count();
    len >= min && len <= max
}

pub fn is_email(value: &str) -> bool {
    EmailAddress::is_valid(value.trim())
}

/// Accepts absolute http(s) URLs and bare hosts such as `example.com/path`.
pub fn is_url(value: &str) -> bool {
    URL_PATTERN.is_match(value.trim())
}

pub fn is_handle(value: &str) -> bool {
    HANDLE_PATTERN.is_match(value.trim())
}

/// Dates travel as `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
