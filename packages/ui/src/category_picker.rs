//! Category selection widgets: the radio grid on the report form and the
//! filter chip bar above list views.

use dioxus::prelude::*;

use store::categories::CATEGORIES;
use store::CategoryFilter;

/// Radio-style grid used on the add-location form.
#[component]
pub fn CategoryPicker(selected: String, on_select: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "category-grid",
            for cat in CATEGORIES {
                button {
                    r#type: "button",
                    key: "{cat.id}",
                    class: if selected == cat.id { "category-option selected" } else { "category-option" },
                    style: "border-color: {cat.color}",
                    onclick: move |_| on_select.call(cat.id.to_string()),
                    "{cat.label}"
                }
            }
        }
    }
}

/// Chip bar for the in-memory category filter. The first chip is the "all"
/// sentinel that passes everything through.
#[component]
pub fn CategoryFilterBar(filter: CategoryFilter, on_change: EventHandler<CategoryFilter>) -> Element {
    rsx! {
        div {
            class: "filter-bar",
            button {
                r#type: "button",
                class: if filter == CategoryFilter::All { "filter-chip selected" } else { "filter-chip" },
                onclick: move |_| on_change.call(CategoryFilter::All),
                "সব"
            }
            for cat in CATEGORIES {
                button {
                    r#type: "button",
                    key: "{cat.id}",
                    class: if filter == CategoryFilter::Only(cat.id.to_string()) { "filter-chip selected" } else { "filter-chip" },
                    onclick: move |_| on_change.call(CategoryFilter::Only(cat.id.to_string())),
                    "{cat.label}"
                }
            }
        }
    }
}
