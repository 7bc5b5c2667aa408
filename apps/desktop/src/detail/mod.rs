//! Product detail overlay.
//!
//! The backdrop closes the overlay; clicks inside the content stop there.

mod gallery;

use dioxus::prelude::*;
use prodsearch_core::detail::OverlayClick;

use crate::state::*;
use gallery::ImageGallery;

#[component]
pub fn ProductModal() -> Element {
    let Some(detail) = OVERLAY.read().detail().cloned() else {
        return rsx! {};
    };
    let product = detail.product();
    let price = product.price_label();
    let old_price = product.old_price_label();
    let badge = detail.discount_badge();
    let swatches: Vec<String> = detail.swatches().into_iter().map(String::from).collect();
    let attributes: Vec<(&'static str, String)> = detail
        .attributes()
        .into_iter()
        .map(|(label, value)| (label, value.to_string()))
        .collect();
    let link = product.link().map(String::from);

    rsx! {
        div {
            class: "modal",
            onclick: move |_| OVERLAY.write().click(OverlayClick::Backdrop),

            div {
                class: "modal-content",
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    OVERLAY.write().click(OverlayClick::Content);
                },

                span {
                    class: "close-modal",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        OVERLAY.write().click(OverlayClick::CloseButton);
                    },
                    "\u{00D7}"
                }

                ImageGallery { detail: detail.clone() }

                div {
                    class: "modal-details",
                    h2 { "{product.name}" }
                    div {
                        class: "price-tag",
                        span { class: "current-price", "{price}" }
                        if let Some(old) = old_price {
                            span { class: "old-price", "{old}" }
                            if let Some(badge) = badge {
                                span { class: "discount-badge", "{badge}" }
                            }
                        }
                    }

                    if !swatches.is_empty() {
                        div {
                            class: "color-swatches",
                            for color in swatches {
                                div {
                                    class: "color-swatch",
                                    title: "{color}",
                                    style: "background-color: {color}",
                                }
                            }
                        }
                    }

                    for (label, value) in attributes {
                        p {
                            strong { "{label}:" }
                            " {value}"
                        }
                    }

                    if let Some(href) = link {
                        a {
                            class: "store-link",
                            href: "{href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "View on Store"
                        }
                    }
                }
            }
        }
    }
}
