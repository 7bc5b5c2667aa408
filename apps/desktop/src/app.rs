//! Root application component — search header, filter panel, results, overlay.

use dioxus::prelude::*;

use crate::detail::ProductModal;
use crate::error_banner::ErrorBanner;
use crate::results::ResultsArea;
use crate::search::{FilterPanel, SearchPanel};
use crate::state::*;

static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    use_future(load_filter_options);

    let panel_open = *FILTER_PANEL_OPEN.read();

    rsx! {
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            SearchPanel {}
            ErrorBanner {}

            div {
                class: "content-area",
                FilterPanel {}
                div {
                    class: if panel_open { "results-area shifted" } else { "results-area" },
                    ResultsArea {}
                }
            }

            ProductModal {}
        }
    }
}
