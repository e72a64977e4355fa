
use crate::results::{ScrapeResult, ScrapedImage};

/// Two fully populated pages plus one with nothing but a URL
pub(crate) fn sample_pages() -> Vec<ScrapeResult> {
    vec![
        ScrapeResult {
            url: "https://a.com".to_string(),
            title: Some("Page A".to_string()),
            timestamp: Some("2024-01-15T14:30:05.123456".to_string()),
            links: Some(vec!["https://a.com/1".to_string(), "https://a.com/2".to_string()]),
            text: Some(vec!["First block".to_string(), "Second block".to_string()]),
            images: Some(vec![ScrapedImage {
                url: "https://a.com/logo.png".to_string(),
                alt: Some("Logo".to_string()),
                filename: Some("logo.png".to_string()),
            }]),
            tables: Some(vec![
                vec![
                    vec!["H1".to_string(), "H2".to_string()],
                    vec!["a".to_string(), "b".to_string()],
                    vec!["c".to_string()],
                ],
                vec![vec!["Only header".to_string()]],
            ]),
        },
        ScrapeResult {
            url: "https://b.com".to_string(),
            title: None,
            timestamp: Some("not a date".to_string()),
            links: Some(vec![]),
            ..ScrapeResult::default()
        },
        ScrapeResult::new("https://c.com"),
    ]
}
