use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+").expect("email pattern compiles"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d -]{8,12}\d").expect("phone pattern compiles"));

static COMMA_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r",+").expect("comma pattern compiles"));

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Collapses comma runs to ", " and whitespace runs to one space, then trims.
pub fn normalize_text(raw: &str) -> String {
    let commas = COMMA_RUN_RE.replace_all(raw, ", ");
    WHITESPACE_RE.replace_all(&commas, " ").trim().to_string()
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().trim().to_string())
}

/// A document after normalization, with its non-blank lines kept alongside.
/// Normalization erases line breaks; the header heuristics still need them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub text: String,
    /// Normalized non-blank lines, in document order.
    pub lines: Vec<String>,
}

impl SourceText {
    pub fn new(raw: &str) -> Self {
        Self {
            text: normalize_text(raw),
            lines: raw
                .lines()
                .map(normalize_text)
                .filter(|line| !line.is_empty())
                .collect(),
        }
    }
}

/// Positional fallback for the name: the first non-blank line of the raw document.
pub fn first_line(raw: &str) -> Option<String> {
    raw.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(String::from)
}
