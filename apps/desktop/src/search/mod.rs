//! Search header — input field, filter toggle, metadata strip — and the filter panel.

mod filter_panel;
mod metadata_strip;
mod search_input;

use dioxus::prelude::*;
use metadata_strip::MetadataStrip;
use search_input::SearchInput;

use crate::state::*;

pub use filter_panel::FilterPanel;

/// Search header spanning the full width of the window. Moves to a compact
/// layout once results have been shown.
#[component]
pub fn SearchPanel() -> Element {
    let results_shown = SESSION.read().has_shown_results();
    let panel_open = *FILTER_PANEL_OPEN.read();

    rsx! {
        div {
            class: if results_shown { "search-container results-shown" } else { "search-container" },
            div {
                class: "search-row",
                SearchInput {}
                button {
                    class: if panel_open { "filter-toggle open" } else { "filter-toggle" },
                    title: "Filters",
                    onclick: move |_| {
                        let open = !*FILTER_PANEL_OPEN.read();
                        *FILTER_PANEL_OPEN.write() = open;
                    },
                    "Filters"
                }
            }
            MetadataStrip {}
        }
    }
}
