//! Chronological feed of reported spots.

use dioxus::prelude::*;

use store::{feed::filter_by_category, CategoryFilter, FeedPhase};
use ui::{use_location_feed, CategoryFilterBar, LocationCard};

use crate::Route;

#[component]
pub fn Feed() -> Element {
    let config = use_resource(|| async { api::app_config().await.unwrap_or_default() });

    match config() {
        Some(cfg) => rsx! {
            LiveFeed { poll_interval_secs: cfg.feed.poll_interval_secs }
        },
        None => rsx! {
            div { class: "page-loading", "লোড হচ্ছে... ⏳" }
        },
    }
}

#[component]
fn LiveFeed(poll_interval_secs: u32) -> Element {
    let feed = use_location_feed(poll_interval_secs);
    let mut filter = use_signal(|| CategoryFilter::All);
    let nav = use_navigator();

    let snapshot = feed();
    let visible = filter_by_category(&snapshot.locations, &filter());

    rsx! {
        div {
            class: "page feed",

            header {
                class: "page-header",
                h1 { "খাবারের ফিড 📰" }
            }

            CategoryFilterBar {
                filter: filter(),
                on_change: move |f| filter.set(f),
            }

            match snapshot.phase {
                FeedPhase::Loading => rsx! {
                    div { class: "page-loading", "খাবার খুঁজছি... 🔍" }
                },
                FeedPhase::Error => rsx! {
                    div { class: "page-error", "ইশ! সার্ভারে সমস্যা হচ্ছে। একটু পরে আবার দেখো। 😫" }
                },
                _ => rsx! {
                    if visible.is_empty() {
                        div {
                            class: "page-empty",
                            p { "এখনো কেউ কিছু শেয়ার করেনি! 🍽️" }
                            p { "তুমিই প্রথম হও — আশেপাশে ফ্রি খাবার দেখলে জানাও!" }
                        }
                    } else {
                        div {
                            class: "card-list",
                            for location in visible {
                                LocationCard {
                                    key: "{location.id}",
                                    location: location,
                                    on_open: move |id| { nav.push(Route::LocationDetails { id }); },
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
