use crate::render::node::{Node, el};
use crate::render::{page_block, placeholder};
use crate::results::ScrapeResult;

pub const NO_TEXT: &str = "No text content found on this page.";

/// Renders the text view: every text block as its own paragraph, in order
pub fn render(data: &[ScrapeResult]) -> Vec<Node> {
    data.iter()
        .map(|page| {
            let body = if page.text().is_empty() {
                placeholder(NO_TEXT)
            } else {
                el("div")
                    .class("text-content")
                    .children(page.text().iter().map(|block| el("p").text(block.as_str())))
                    .into()
            };
            page_block("Text from: ", page, vec![body])
        })
        .collect()
}
