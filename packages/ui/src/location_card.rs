//! Feed card for one reported spot.

use dioxus::prelude::*;

use store::categories;
use store::LocationInfo;

use crate::time::{now_ms, time_ago};

/// One card in the feed or home list. Navigation is the caller's concern;
/// the card only reports the tap.
#[component]
pub fn LocationCard(location: LocationInfo, on_open: EventHandler<String>) -> Element {
    let now = now_ms();
    let expired = location.is_expired(now);
    let label = location.category_label().to_string();
    let color = categories::color(&location.category);
    let posted = time_ago(now, location.created_at);
    let id = location.id.clone();

    rsx! {
        article {
            class: if expired { "location-card expired" } else { "location-card" },
            onclick: move |_| on_open.call(id.clone()),

            div {
                class: "card-image",
                img { src: "{location.image_url}", alt: "{location.name}" }
                span {
                    class: "category-chip",
                    style: "background-color: {color}",
                    "{label}"
                }
                if expired {
                    span { class: "freshness stale", "বাসি খবর 🕰️" }
                } else {
                    span { class: "freshness fresh", "তাজা খবর 🔥" }
                }
            }

            div {
                class: "card-body",
                h3 { "{location.name}" }
                p { class: "posted", "{posted} · {location.user_name}" }
                div {
                    class: "counts",
                    span { class: "verified", "{location.verified_count} সত্য" }
                    span { class: "fake", "{location.fake_count} ভুয়া" }
                }
            }
        }
    }
}
