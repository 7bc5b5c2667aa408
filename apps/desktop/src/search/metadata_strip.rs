//! Metadata strip showing the search state and result count.

use dioxus::prelude::*;
use prodsearch_core::session::SearchPhase;

use crate::state::*;

#[component]
pub fn MetadataStrip() -> Element {
    let session = SESSION.read();

    let text = match session.phase() {
        SearchPhase::Idle => return rsx! { div { class: "metadata-strip hidden" } },
        SearchPhase::Loading => "Searching\u{2026}".to_string(),
        SearchPhase::ShowingResults => match session.products().len() {
            1 => "1 product".to_string(),
            n => format!("{n} products"),
        },
        SearchPhase::ShowingErrors => "Search failed".to_string(),
    };

    rsx! {
        div {
            class: "metadata-strip",
            span { class: "metadata-count", "{text}" }
        }
    }
}
