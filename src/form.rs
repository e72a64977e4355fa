use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Delay sent when the delay field is missing or unparsable
pub const DEFAULT_DELAY_SECS: f64 = 1.0;

/// Timeout sent when the timeout field is missing or unparsable
pub const DEFAULT_TIMEOUT_SECS: i64 = 10;

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid float pattern")
});

static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("valid integer pattern"));

/// Raw form state, exactly as the user typed it
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    /// Newline separated list of URLs
    pub urls: String,
    pub extract_links: bool,
    pub extract_text: bool,
    pub extract_images: bool,
    pub extract_tables: bool,
    /// CSS selector restricting text extraction
    pub text_selector: String,
    /// Delay between requests, in seconds
    pub delay: String,
    /// Per-request timeout, in seconds
    pub timeout: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            urls: String::new(),
            extract_links: true,
            extract_text: true,
            extract_images: true,
            extract_tables: true,
            text_selector: String::new(),
            delay: String::new(),
            timeout: String::new(),
        }
    }
}

/// The request body sent to the scraping service
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRequest {
    pub urls: Vec<String>,
    pub extract_links: bool,
    pub extract_text: bool,
    pub extract_images: bool,
    pub extract_tables: bool,
    pub text_selector: Option<String>,
    pub delay: f64,
    pub timeout: i64,
}

impl FormInput {
    /// Create form input holding the given URL text and default options
    pub fn with_urls(urls: impl Into<String>) -> Self {
        Self {
            urls: urls.into(),
            ..Self::default()
        }
    }

    /// Normalize the raw form fields into a request
    ///
    /// An empty URL list is passed through; the service decides what to do with it.
    pub fn to_request(&self) -> ScrapeRequest {
        let text_selector = if self.text_selector.trim().is_empty() {
            None
        } else {
            Some(self.text_selector.clone())
        };

        ScrapeRequest {
            urls: split_urls(&self.urls),
            extract_links: self.extract_links,
            extract_text: self.extract_text,
            extract_images: self.extract_images,
            extract_tables: self.extract_tables,
            text_selector,
            delay: parse_delay(&self.delay),
            timeout: parse_timeout(&self.timeout),
        }
    }
}

/// Split textarea input into trimmed, non-blank lines, keeping order and duplicates
pub fn split_urls(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the leading decimal number of the input.
///
/// Zero, non-finite and unparsable values fall back to [`DEFAULT_DELAY_SECS`].
pub fn parse_delay(raw: &str) -> f64 {
    LEADING_FLOAT
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value != 0.0)
        .unwrap_or(DEFAULT_DELAY_SECS)
}

/// Parse the leading integer of the input.
///
/// Zero and unparsable values fall back to [`DEFAULT_TIMEOUT_SECS`].
pub fn parse_timeout(raw: &str) -> i64 {
    LEADING_INT
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .filter(|value| *value != 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}
