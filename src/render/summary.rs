use crate::render::node::{Element, Node, el};
use crate::render::{Renderer, page_block};
use crate::results::ScrapeResult;

/// Totals across every scraped page; absent categories count as zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryCounts {
    pub pages: usize,
    pub links: usize,
    pub images: usize,
    pub tables: usize,
}

impl SummaryCounts {
    pub fn from_pages(data: &[ScrapeResult]) -> Self {
        data.iter().fold(
            Self {
                pages: data.len(),
                ..Self::default()
            },
            |acc, page| Self {
                links: acc.links + page.links().len(),
                images: acc.images + page.images().len(),
                tables: acc.tables + page.tables().len(),
                ..acc
            },
        )
    }
}

/// Renders the summary view: overall statistics followed by one block per page
pub fn render(renderer: &Renderer, data: &[ScrapeResult]) -> Vec<Node> {
    let counts = SummaryCounts::from_pages(data);

    let mut nodes: Vec<Node> = vec![
        el("h4").text("Scraping Summary").into(),
        el("p")
            .text(format!("Successfully scraped {} page(s).", counts.pages))
            .into(),
        el("div")
            .class("result-item")
            .child(el("div").class("result-title").text("Summary Statistics"))
            .child(
                el("div")
                    .class("result-meta")
                    .child(stat("fas fa-link", format!("{} links found", counts.links)))
                    .child(stat("fas fa-image", format!("{} images found", counts.images)))
                    .child(stat("fas fa-table", format!("{} tables found", counts.tables))),
            )
            .into(),
    ];

    nodes.extend(data.iter().map(|page| {
        let meta = el("div")
            .class("result-meta")
            .child(stat("fas fa-clock", renderer.timestamp(page.timestamp.as_deref())))
            .child(stat("fas fa-link", format!("{} links", page.links().len())))
            .child(stat("fas fa-image", format!("{} images", page.images().len())))
            .child(stat("fas fa-table", format!("{} tables", page.tables().len())));
        page_block("", page, vec![meta.into()])
    }));

    nodes
}

/// An icon followed by a label
fn stat(icon: &'static str, label: String) -> Element {
    el("span").child(el("i").class(icon)).text(format!(" {label}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_treat_absent_as_zero() {
        let mut a = ScrapeResult::new("https://a.com");
        a.links = Some(vec!["https://a.com/1".into(), "https://a.com/2".into()]);
        a.tables = Some(vec![vec![vec!["H".into()]]]);
        let mut b = ScrapeResult::new("https://b.com");
        b.links = Some(vec![]);
        let c = ScrapeResult::new("https://c.com");

        let counts = SummaryCounts::from_pages(&[a, b, c]);
        assert_eq!(
            counts,
            SummaryCounts {
                pages: 3,
                links: 2,
                images: 0,
                tables: 1
            }
        );
    }
}
