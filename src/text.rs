use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("valid non-digit regex"));
static US_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1?(\d{3})(\d{3})(\d{4})$").expect("valid phone regex"));
static HAS_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:f|ht)tps?://").expect("valid scheme regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

pub const DEFAULT_TRUNCATE_LENGTH: usize = 10;
pub const DEFAULT_TRUNCATE_SUFFIX: &str = " ";

/// Lower-case, then capitalize the first letter of each word.
pub fn title_case(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut at_word_start = true;

    for c in lower.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// Cut `text` to `length` characters, ending with `suffix`.
pub fn truncate_text(text: &str, length: usize, suffix: &str) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let keep = length.saturating_sub(suffix.chars().count());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(suffix);
    out
}

/// Text following the first `start`, up to the next `end`.
///
/// Returns an empty string when `start` is missing or opens the string.
/// An empty or absent `end`, or one found right after `start`, yields the
/// remainder of the string.
pub fn between(s: &str, start: &str, end: &str) -> String {
    let begin = match s.find(start) {
        Some(pos) if pos > 0 => pos + start.len(),
        _ => return String::new(),
    };
    let rest = &s[begin..];

    match (end.is_empty(), rest.find(end)) {
        (false, Some(pos)) if pos > 0 => rest[..pos].to_string(),
        _ => rest.to_string(),
    }
}

/// Render 10-digit numbers (optionally with a leading 1) as `(DDD) DDD-DDDD`.
pub fn format_phone_number(phone: &str) -> String {
    let digits = NON_DIGIT.replace_all(phone, "");
    US_PHONE.replace(&digits, "($1) $2-$3").into_owned()
}

/// Prefix `http://` when the link carries no http(s)/ftp(s) scheme.
pub fn with_scheme(link: &str) -> String {
    if HAS_SCHEME.is_match(link) {
        link.to_string()
    } else {
        format!("http://{}", link)
    }
}

pub fn strip_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s, "").into_owned()
}

/// Absolute URL with a host, or one of the host-less `mailto:`/`news:`/`file:` schemes.
pub fn is_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => url.has_host() || matches!(url.scheme(), "mailto" | "news" | "file"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hELLO wORLD"), "Hello World");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10, " "), "short");
        assert_eq!(truncate_text("abcdefghijkl", 10, "..."), "abcdefg...");
        assert_eq!(
            truncate_text("abcdefghijkl", DEFAULT_TRUNCATE_LENGTH, DEFAULT_TRUNCATE_SUFFIX),
            "abcdefghi "
        );
    }

    #[test]
    fn test_between() {
        assert_eq!(between("key=[value] tail", "[", "]"), "value");
        assert_eq!(between("key=[value", "[", "]"), "value");
        assert_eq!(between("[value]", "[", "]"), "");
        assert_eq!(between("no markers", "[", "]"), "");
        assert_eq!(between("a:b:c", ":", ""), "b:c");
    }

    #[test]
    fn test_format_phone_number() {
        assert_eq!(format_phone_number("+1 555.123.4567"), "(555) 123-4567");
        assert_eq!(format_phone_number("555-123-4567"), "(555) 123-4567");
        assert_eq!(format_phone_number("12-34"), "1234");
    }

    #[test]
    fn test_with_scheme() {
        assert_eq!(with_scheme("example.com"), "http://example.com");
        assert_eq!(with_scheme("HTTPS://example.com"), "HTTPS://example.com");
        assert_eq!(with_scheme("ftp://files"), "ftp://files");
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(" a b\t\nc "), "abc");
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/path?q=1"));
        assert!(is_url("ftp://files.example.com"));
        assert!(is_url("mailto:someone@example.com"));
        assert!(!is_url("example.com"));
        assert!(!is_url("http://"));
        assert!(!is_url("not a url"));
        assert!(!is_url(""));
    }
}
