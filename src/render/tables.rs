use crate::render::node::{Node, el};
use crate::render::{page_block, placeholder};
use crate::results::{ScrapeResult, Table};

pub const NO_TABLES: &str = "No tables found on this page.";

/// Renders the tables view; tables are numbered from 1 within each page
pub fn render(data: &[ScrapeResult]) -> Vec<Node> {
    data.iter()
        .map(|page| {
            let body = if page.tables().is_empty() {
                vec![placeholder(NO_TABLES)]
            } else {
                page.tables()
                    .iter()
                    .enumerate()
                    .flat_map(|(index, table)| {
                        [
                            Node::from(el("h5").text(format!("Table {}", index + 1))),
                            Node::from(el("div").class("table-container").child(table_node(table))),
                        ]
                    })
                    .collect()
            };
            page_block("Tables from: ", page, body)
        })
        .collect()
}

/// Row 0 is rendered as header cells. Rows keep their own width.
fn table_node(table: &Table) -> Node {
    el("table")
        .children(table.iter().enumerate().map(|(row_index, row)| {
            let cell_tag = if row_index == 0 { "th" } else { "td" };
            el("tr").children(row.iter().map(|cell| el(cell_tag).text(cell.as_str())))
        }))
        .into()
}
