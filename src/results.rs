use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Title shown for pages that came back without one
pub const UNTITLED_PAGE: &str = "Untitled Page";

/// A table as scraped: rows of cells, row 0 being the header row
pub type Table = Vec<Vec<String>>;

/// Represents one scraped page as returned by the scraping service
///
/// Every category field is optional on the wire. A missing field, an explicit
/// `null` and an empty array are all treated the same way by the accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// URL of the page
    pub url: String,

    /// Title of the page (if available)
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,

    /// When the page was scraped, as reported by the service
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: Option<String>,

    /// Links discovered on the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,

    /// Extracted text blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,

    /// Images found on the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ScrapedImage>>,

    /// Tables found on the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<Table>>,
}

/// An image reference extracted from a page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapedImage {
    pub url: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub alt: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub filename: Option<String>,
}

/// Accept any JSON scalar for an optional display string.
///
/// Numbers and booleans keep their JSON spelling; arrays, objects and null
/// become `None`. A single odd field must not sink the whole result list.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

impl ScrapeResult {
    /// Create a page record with only its URL set
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Title to display, falling back to [`UNTITLED_PAGE`] for missing or blank titles
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNTITLED_PAGE,
        }
    }

    pub fn links(&self) -> &[String] {
        self.links.as_deref().unwrap_or(&[])
    }

    pub fn text(&self) -> &[String] {
        self.text.as_deref().unwrap_or(&[])
    }

    pub fn images(&self) -> &[ScrapedImage] {
        self.images.as_deref().unwrap_or(&[])
    }

    pub fn tables(&self) -> &[Table] {
        self.tables.as_deref().unwrap_or(&[])
    }
}

impl ScrapedImage {
    /// Alt text to display; missing or empty alt text shows as "None"
    pub fn display_alt(&self) -> &str {
        match self.alt.as_deref() {
            Some(alt) if !alt.is_empty() => alt,
            _ => "None",
        }
    }

    pub fn display_filename(&self) -> &str {
        self.filename.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_null_and_empty_categories_are_equivalent() {
        let json = r#"[
            {"url": "https://a.com"},
            {"url": "https://b.com", "links": null, "images": null},
            {"url": "https://c.com", "links": [], "text": [], "images": [], "tables": []}
        ]"#;
        let pages: Vec<ScrapeResult> = serde_json::from_str(json).unwrap();

        assert_eq!(pages.len(), 3);
        for page in &pages {
            assert!(page.links().is_empty());
            assert!(page.text().is_empty());
            assert!(page.images().is_empty());
            assert!(page.tables().is_empty());
        }
    }

    #[test]
    fn test_title_fallback() {
        let mut page = ScrapeResult::new("https://a.com");
        assert_eq!(page.display_title(), UNTITLED_PAGE);

        page.title = Some(String::new());
        assert_eq!(page.display_title(), UNTITLED_PAGE);

        page.title = Some("Home".to_string());
        assert_eq!(page.display_title(), "Home");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"url": "https://a.com", "status": 200, "title": "A",
            "timestamp": "2024-01-15T10:30:00",
            "images": [{"url": "https://a.com/x.png", "filename": "x.png"}]}"#;
        let page: ScrapeResult = serde_json::from_str(json).unwrap();

        assert_eq!(page.title.as_deref(), Some("A"));
        assert_eq!(page.images().len(), 1);
        assert_eq!(page.images()[0].display_alt(), "None");
        assert_eq!(page.images()[0].display_filename(), "x.png");
    }

    #[test]
    fn test_odd_scalar_types_are_tolerated() {
        let json = r#"{"url": "https://a.com", "title": 404, "timestamp": 1705312200000,
            "images": [{"url": "https://a.com/x.png", "alt": false, "filename": {"name": "x"}}]}"#;
        let page: ScrapeResult = serde_json::from_str(json).unwrap();

        assert_eq!(page.display_title(), "404");
        assert_eq!(page.timestamp.as_deref(), Some("1705312200000"));
        assert_eq!(page.images()[0].alt.as_deref(), Some("false"));
        assert_eq!(page.images()[0].filename, None);

        let page: ScrapeResult =
            serde_json::from_str(r#"{"url": "https://a.com", "title": null, "timestamp": []}"#)
                .unwrap();
        assert_eq!(page.display_title(), UNTITLED_PAGE);
        assert_eq!(page.timestamp, None);
    }
}
