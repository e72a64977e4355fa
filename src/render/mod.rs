pub mod html;
pub mod images;
pub mod links;
pub mod node;
pub mod page;
pub mod summary;
pub mod tables;
pub mod text;

#[cfg(test)]
mod tests;

use crate::config::ServiceConfig;
use crate::results::ScrapeResult;
use crate::tabs::TabId;
use crate::utils::{format_timestamp, format_timestamp_in};
use chrono::FixedOffset;
use node::{Node, el};

/// Shown in every view when the service returned no pages
pub const NO_DATA: &str = "No data was scraped successfully.";

/// The fully rendered result views, one tree per tab
#[derive(Debug, Clone, PartialEq)]
pub struct ResultViews {
    pub summary: Vec<Node>,
    pub links: Vec<Node>,
    pub text: Vec<Node>,
    pub images: Vec<Node>,
    pub tables: Vec<Node>,
}

impl ResultViews {
    /// The view tree shown by the given tab
    pub fn get(&self, tab: TabId) -> &[Node] {
        match tab {
            TabId::Summary => &self.summary,
            TabId::Links => &self.links,
            TabId::Text => &self.text,
            TabId::Images => &self.images,
            TabId::Tables => &self.tables,
        }
    }

    /// Markup for the given tab
    pub fn to_html(&self, tab: TabId) -> String {
        html::to_html(self.get(tab))
    }
}

/// Turns scraped pages into view trees.
///
/// Rendering is a pure function of the input: the same pages always produce
/// the same views and the input is never modified.
#[derive(Debug, Clone)]
pub struct Renderer {
    placeholder_image: String,
    time_zone: Option<FixedOffset>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_config(&ServiceConfig::default())
    }
}

impl Renderer {
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            placeholder_image: config.placeholder_image.clone(),
            time_zone: None,
        }
    }

    /// Format timestamps in a fixed zone instead of the viewer's local zone
    pub fn with_time_zone(mut self, offset: FixedOffset) -> Self {
        self.time_zone = Some(offset);
        self
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    /// Render every view.
    ///
    /// Each view is built in its own full pass over the pages so that any tab
    /// can be shown on its own without touching the others.
    pub fn render(&self, data: &[ScrapeResult]) -> ResultViews {
        if data.is_empty() {
            ::log::debug!("Rendering empty result set");
            return ResultViews {
                summary: no_data(),
                links: no_data(),
                text: no_data(),
                images: no_data(),
                tables: no_data(),
            };
        }

        ::log::debug!("Rendering {} scraped pages", data.len());
        ResultViews {
            summary: summary::render(self, data),
            links: links::render(data),
            text: text::render(data),
            images: images::render(self, data),
            tables: tables::render(data),
        }
    }

    /// Format a page timestamp for display
    pub fn timestamp(&self, raw: Option<&str>) -> String {
        match &self.time_zone {
            Some(offset) => format_timestamp_in(raw, offset),
            None => format_timestamp(raw),
        }
    }
}

fn no_data() -> Vec<Node> {
    vec![placeholder(NO_DATA)]
}

/// A paragraph standing in for missing content
pub(crate) fn placeholder(message: &str) -> Node {
    el("p").text(message).into()
}

/// Block for one page: title line (with optional prefix) and URL line, then `body`
pub(crate) fn page_block(prefix: &str, page: &ScrapeResult, body: Vec<Node>) -> Node {
    el("div")
        .class("result-item")
        .child(
            el("div")
                .class("result-title")
                .text(format!("{prefix}{}", page.display_title())),
        )
        .child(el("div").class("result-url").text(page.url.as_str()))
        .children(body)
        .into()
}
