//! Result area — loading spinner, empty note, or the product grid.

mod product_card;

use dioxus::prelude::*;
use prodsearch_core::session::SearchPhase;

use crate::state::*;
use product_card::ProductCard;

#[component]
pub fn ResultsArea() -> Element {
    let session = SESSION.read();

    match session.phase() {
        SearchPhase::Idle | SearchPhase::ShowingErrors => rsx! {
            div { class: "products-grid" }
        },
        SearchPhase::Loading => rsx! {
            div { class: "products-grid" }
            div { class: "loading-spinner" }
        },
        SearchPhase::ShowingResults if session.products().is_empty() => rsx! {
            div {
                class: "products-empty",
                span { "No products found" }
            }
        },
        SearchPhase::ShowingResults => rsx! {
            div {
                class: "products-grid",
                for (i, product) in session.products().iter().enumerate() {
                    ProductCard { key: "{i}", product: product.clone() }
                }
            }
        },
    }
}
