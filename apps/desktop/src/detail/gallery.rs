//! Image strip for the overlay. Exactly one image carries `selected`.

use dioxus::prelude::*;
use prodsearch_core::detail::ProductDetail;

use crate::state::*;

#[component]
pub fn ImageGallery(detail: ProductDetail) -> Element {
    let name = detail.product().name.clone();

    rsx! {
        div {
            class: "modal-images",
            for (i, src) in detail.product().images.iter().enumerate() {
                img {
                    key: "{i}",
                    class: if detail.is_selected(i) { "modal-image selected" } else { "modal-image" },
                    src: "{src}",
                    alt: "{name}",
                    onclick: move |_| {
                        if let Some(d) = OVERLAY.write().detail_mut() {
                            d.select_image(i);
                        }
                    },
                }
            }
        }
    }
}
