use clap::{Parser, ValueEnum};
use scrape_console::FormInput;
use scrape_console::export::ExportFormat;
use scrape_console::tabs::TabId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scrape-console")]
#[command(about = "Submit URLs to a scraping service and render the results as HTML")]
#[command(version)]
pub struct Args {
    /// URLs to scrape
    pub urls: Vec<String>,

    /// File with additional URLs, one per line
    #[arg(long)]
    pub url_file: Option<PathBuf>,

    /// Skip link extraction
    #[arg(long)]
    pub no_links: bool,

    /// Skip text extraction
    #[arg(long)]
    pub no_text: bool,

    /// Skip image extraction
    #[arg(long)]
    pub no_images: bool,

    /// Skip table extraction
    #[arg(long)]
    pub no_tables: bool,

    /// CSS selector restricting text extraction
    #[arg(short, long)]
    pub selector: Option<String>,

    /// Delay between requests in seconds
    #[arg(short, long)]
    pub delay: Option<String>,

    /// Per-page timeout in seconds, enforced by the service
    #[arg(short, long)]
    pub timeout: Option<String>,

    /// Scraping service endpoint (overrides config and SCRAPE_ENDPOINT)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Result tab shown when the page opens
    #[arg(long, value_enum, default_value_t = TabArg::Summary)]
    pub tab: TabArg,

    /// Write the results page here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Trigger an export of the results
    #[arg(long, value_enum)]
    pub export: Option<ExportArg>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Summary,
    Links,
    Text,
    Images,
    Tables,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportArg {
    Json,
    Csv,
}

impl From<TabArg> for TabId {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Summary => TabId::Summary,
            TabArg::Links => TabId::Links,
            TabArg::Text => TabId::Text,
            TabArg::Images => TabId::Images,
            TabArg::Tables => TabId::Tables,
        }
    }
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Json => ExportFormat::Json,
            ExportArg::Csv => ExportFormat::Csv,
        }
    }
}

impl Args {
    /// Fill in the form the way a user would, given the extra URL text from `--url-file`
    pub fn to_form(&self, file_urls: Option<&str>) -> FormInput {
        let mut urls = self.urls.join("\n");
        if let Some(extra) = file_urls {
            if !urls.is_empty() {
                urls.push('\n');
            }
            urls.push_str(extra);
        }

        FormInput {
            urls,
            extract_links: !self.no_links,
            extract_text: !self.no_text,
            extract_images: !self.no_images,
            extract_tables: !self.no_tables,
            text_selector: self.selector.clone().unwrap_or_default(),
            delay: self.delay.clone().unwrap_or_default(),
            timeout: self.timeout.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_from_args() {
        let args = Args::parse_from([
            "scrape-console",
            "https://a.com",
            "https://b.com",
            "--no-images",
            "--delay",
            "2.5",
        ]);
        let form = args.to_form(Some("https://c.com\n\n"));
        let request = form.to_request();

        assert_eq!(request.urls, vec!["https://a.com", "https://b.com", "https://c.com"]);
        assert!(!request.extract_images);
        assert!(request.extract_links);
        assert_eq!(request.delay, 2.5);
        assert_eq!(request.timeout, 10);
        assert_eq!(request.text_selector, None);
    }

    #[test]
    fn test_tab_and_export_args() {
        let args = Args::parse_from(["scrape-console", "--tab", "tables", "--export", "csv"]);
        assert_eq!(TabId::from(args.tab), TabId::Tables);
        assert_eq!(args.export.map(ExportFormat::from), Some(ExportFormat::Csv));
    }
}
