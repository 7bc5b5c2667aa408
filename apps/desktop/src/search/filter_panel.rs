//! Filter panel — price range, currency, categories, shop, region, status.
//!
//! Controls write raw values into `FILTERS`; nothing is parsed until a search
//! runs. Controls named by the current error set get the `input-error` class.

use dioxus::prelude::*;
use prodsearch_core::errors::FilterControl;
use prodsearch_core::filters::StockStatus;

use crate::state::*;

fn control_class(base: &'static str, control: FilterControl) -> String {
    if ERROR_BOARD.read().is_marked(control) {
        format!("{base} input-error")
    } else {
        base.to_string()
    }
}

#[component]
pub fn FilterPanel() -> Element {
    let open = *FILTER_PANEL_OPEN.read();
    let filters = FILTERS.read().clone();
    let options = FILTER_OPTIONS.read().clone();

    rsx! {
        aside {
            class: if open { "filter-panel open" } else { "filter-panel" },

            // Price range
            div {
                class: "filter-section",
                h4 { "Price" }
                div {
                    class: "price-range",
                    input {
                        id: "minPrice",
                        class: control_class("price-input", FilterControl::MinPrice),
                        r#type: "number",
                        placeholder: "Min",
                        value: "{filters.min_price}",
                        oninput: move |e: FormEvent| FILTERS.write().min_price = e.value(),
                    }
                    input {
                        id: "maxPrice",
                        class: control_class("price-input", FilterControl::MaxPrice),
                        r#type: "number",
                        placeholder: "Max",
                        value: "{filters.max_price}",
                        oninput: move |e: FormEvent| FILTERS.write().max_price = e.value(),
                    }
                }
                select {
                    id: "currency",
                    class: control_class("filter-select", FilterControl::Currency),
                    value: "{filters.currency}",
                    onchange: move |e: FormEvent| FILTERS.write().currency = e.value(),
                    option { value: "", "Select currency" }
                    for c in options.currencies.iter() {
                        option { key: "{c}", value: "{c}", selected: *c == filters.currency, "{c}" }
                    }
                }
            }

            // Categories
            div {
                class: control_class("filter-section category-options", FilterControl::Category),
                h4 { "Categories" }
                if options.categories.is_empty() {
                    span { class: "filter-empty", "No categories" }
                }
                for c in options.categories.iter().cloned() {
                    label {
                        key: "{c}",
                        class: "category-option",
                        input {
                            r#type: "checkbox",
                            value: "{c}",
                            checked: filters.categories.contains(&c),
                            onchange: {
                                let c = c.clone();
                                move |_| FILTERS.write().toggle_category(&c)
                            },
                        }
                        span { "{c}" }
                    }
                }
            }

            // Shop / region
            div {
                class: "filter-section",
                h4 { "Shop" }
                select {
                    name: "shop",
                    class: control_class("filter-select", FilterControl::Shop),
                    value: "{filters.shop}",
                    onchange: move |e: FormEvent| FILTERS.write().shop = e.value(),
                    option { value: "", "Any shop" }
                    for s in options.shops.iter() {
                        option { key: "{s}", value: "{s}", selected: *s == filters.shop, "{s}" }
                    }
                }
                h4 { "Region" }
                select {
                    id: "region",
                    class: control_class("filter-select", FilterControl::Region),
                    value: "{filters.region}",
                    onchange: move |e: FormEvent| FILTERS.write().region = e.value(),
                    option { value: "", "Any region" }
                    for r in options.regions.iter() {
                        option { key: "{r}", value: "{r}", selected: *r == filters.region, "{r}" }
                    }
                }
            }

            // Status
            div {
                class: control_class("filter-section status-options", FilterControl::Status),
                h4 { "Status" }
                for (status, text) in StockStatus::ALL.map(|s| (s, s.label())) {
                    label {
                        key: "{text}",
                        class: "status-option",
                        input {
                            r#type: "radio",
                            name: "status",
                            value: "{status}",
                            checked: filters.status == status,
                            onchange: move |_| FILTERS.write().status = status,
                        }
                        span { "{text}" }
                    }
                }
            }

            button {
                class: "apply-filters",
                onclick: move |_| run_search(),
                "Apply filters"
            }
        }
    }
}
