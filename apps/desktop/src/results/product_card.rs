//! One result card: first image, name, size tags. Click opens the overlay.

use std::sync::Arc;

use dioxus::prelude::*;
use prodsearch_core::product::{CardSummary, Product};

use crate::state::*;

#[component]
pub fn ProductCard(product: Arc<Product>) -> Element {
    let card = CardSummary::from(&*product);
    let name = card.name.to_string();

    rsx! {
        div {
            class: "product-card",
            onclick: {
                let product = product.clone();
                move |_| OVERLAY.write().open(product.clone())
            },
            if let Some(src) = card.image {
                img { class: "product-image", src: "{src}", alt: "{name}" }
            } else {
                div { class: "product-image placeholder" }
            }
            div {
                class: "product-info",
                h3 { class: "product-name", "{name}" }
                div {
                    class: "product-sizes",
                    for size in card.sizes.iter() {
                        span { class: "size-tag", "{size}" }
                    }
                }
            }
        }
    }
}
