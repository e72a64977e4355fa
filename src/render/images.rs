use crate::render::node::{Node, el};
use crate::render::{Renderer, page_block, placeholder};
use crate::results::{ScrapeResult, ScrapedImage};

pub const NO_IMAGES: &str = "No images found on this page.";

/// Renders the images view as a grid per page
pub fn render(renderer: &Renderer, data: &[ScrapeResult]) -> Vec<Node> {
    let onerror = fallback_handler(renderer.placeholder_image());

    data.iter()
        .map(|page| {
            let body = if page.images().is_empty() {
                placeholder(NO_IMAGES)
            } else {
                el("div")
                    .class("image-grid")
                    .children(page.images().iter().map(|image| image_item(image, &onerror)))
                    .into()
            };
            page_block("Images from: ", page, vec![body])
        })
        .collect()
}

fn image_item(image: &ScrapedImage, onerror: &str) -> Node {
    el("div")
        .class("image-item")
        .child(
            el("img")
                .url_attr("src", image.url.as_str())
                .attr("alt", image.alt.as_deref().unwrap_or(""))
                .attr("onerror", onerror),
        )
        .child(
            el("div")
                .class("image-info")
                .child(caption("Filename:", image.display_filename()))
                .child(caption("Alt Text:", image.display_alt())),
        )
        .into()
}

fn caption(label: &str, value: &str) -> Node {
    el("p")
        .child(el("strong").text(label))
        .text(format!(" {value}"))
        .into()
}

/// Inline handler swapping a broken image for the placeholder, once.
///
/// The placeholder URL is embedded as a JSON string literal so quotes in it
/// cannot break out of the script.
pub fn fallback_handler(placeholder_image: &str) -> String {
    let literal = serde_json::to_string(placeholder_image)
        .unwrap_or_else(|_| "\"\"".to_string());
    format!("this.onerror=null;this.src={literal}")
}
