//! Search box with submit button. Enter or click runs the search.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let query = QUERY.read().clone();
    let has_query = !query.is_empty();

    rsx! {
        div {
            class: if has_query { "search-field has-query" } else { "search-field" },

            svg {
                class: "search-icon",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
            }

            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search products...",
                value: "{query}",
                autofocus: true,
                oninput: move |e: Event<FormData>| {
                    *QUERY.write() = e.value();
                },
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        run_search();
                    }
                },
            }

            if has_query {
                button {
                    class: "search-clear",
                    onclick: move |_| {
                        *QUERY.write() = String::new();
                    },
                    "\u{00D7}"
                }
            }

            button {
                class: "search-button",
                onclick: move |_| run_search(),
                "Search"
            }
        }
    }
}
