use crate::render::node::{Node, el};
use crate::render::{page_block, placeholder};
use crate::results::ScrapeResult;

pub const NO_LINKS: &str = "No links found on this page.";

/// Renders the links view, one block per page
pub fn render(data: &[ScrapeResult]) -> Vec<Node> {
    data.iter()
        .map(|page| page_block("Links from: ", page, vec![links_list(page.links())]))
        .collect()
}

/// Links open in a new browsing context without exposing the opener or referrer
fn links_list(links: &[String]) -> Node {
    if links.is_empty() {
        return placeholder(NO_LINKS);
    }

    el("ul")
        .class("links-list")
        .children(links.iter().map(|link| {
            el("li").child(
                el("a")
                    .url_attr("href", link.as_str())
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
                    .text(link.as_str()),
            )
        }))
        .into()
}
