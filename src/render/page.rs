//! Assembles the complete results page from a [`ViewState`].

use crate::export::ExportFormat;
use crate::render::html;
use crate::render::node::{Element, Node, el};
use crate::state::ViewState;
use crate::tabs::TabId;

/// Render the whole page as a standalone HTML document.
///
/// Hidden regions stay in the document with `display:none`, and every tab
/// panel is present; only the active one carries the `active` class.
pub fn document(state: &ViewState) -> String {
    let root: Node = el("html")
        .attr("lang", "en")
        .child(
            el("head")
                .child(el("meta").attr("charset", "utf-8"))
                .child(el("title").text("Web Scraper Results")),
        )
        .child(el("body").child(body(state)))
        .into();

    format!("<!DOCTYPE html>\n{}\n", html::to_html(&[root]))
}

/// The page body without the surrounding document
pub fn body(state: &ViewState) -> Element {
    el("div")
        .class("container")
        .child(shown(
            el("div")
                .attr("id", "loadingIndicator")
                .class("loading")
                .child(el("p").text("Scraping in progress...")),
            state.loading_visible,
        ))
        .child(shown(
            el("div")
                .attr("id", "successAlert")
                .class("alert alert-success")
                .child(el("span").text("Scraping completed successfully!"))
                .child(close_button()),
            state.success_visible,
        ))
        .child(shown(
            el("div")
                .attr("id", "errorAlert")
                .class("alert alert-error")
                .child(
                    el("span")
                        .attr("id", "errorMessage")
                        .text(state.error_message.clone().unwrap_or_default()),
                )
                .child(close_button()),
            state.error_visible,
        ))
        .child(shown(results(state), state.results_visible))
}

fn results(state: &ViewState) -> Element {
    let export_buttons = [ExportFormat::Json, ExportFormat::Csv].map(|format| {
        el("button")
            .attr("id", format.button_id())
            .class("btn btn-secondary")
            .text(format!("Export {}", format.label()))
    });

    let tab_buttons = state.tabs.tabs().map(|(tab, active)| {
        el("button")
            .class(if active { "tab-btn active" } else { "tab-btn" })
            .attr("data-tab", tab.as_str())
            .text(tab.label())
    });

    let panels = state.tabs.tabs().map(|(tab, active)| {
        el("div")
            .attr("id", tab.panel_id())
            .class(if active { "tab-content active" } else { "tab-content" })
            .children(panel_content(state, tab))
    });

    el("div")
        .attr("id", "resultsContainer")
        .child(
            el("div")
                .class("results-header")
                .child(el("h3").text("Results"))
                .child(el("div").class("export-buttons").children(export_buttons)),
        )
        .child(el("div").class("tabs").children(tab_buttons))
        .children(panels)
}

fn panel_content(state: &ViewState, tab: TabId) -> Vec<Node> {
    state
        .views
        .as_ref()
        .map(|views| views.get(tab).to_vec())
        .unwrap_or_default()
}

fn close_button() -> Element {
    el("button").class("close-btn").text("\u{00d7}")
}

fn shown(element: Element, visible: bool) -> Element {
    if visible {
        element
    } else {
        element.attr("style", "display:none")
    }
}
