//! Inline error messages, one block per field, each with its own close control.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn ErrorBanner() -> Element {
    let entries = ERROR_BOARD.read().entries().to_vec();

    if entries.is_empty() {
        return rsx! {
            div { class: "error-container hidden" }
        };
    }

    rsx! {
        div {
            class: "error-container",
            div {
                class: "error-messages",
                for entry in entries {
                    div {
                        key: "{entry.field}",
                        class: "error-message",
                        div {
                            class: "error-content",
                            div { class: "error-field", "{entry.label}" }
                            div { class: "error-text", "{entry.message}" }
                        }
                        span {
                            class: "error-close",
                            onclick: {
                                let field = entry.field.clone();
                                move |_| ERROR_BOARD.write().dismiss(&field)
                            },
                            "\u{00D7}"
                        }
                    }
                }
            }
        }
    }
}
