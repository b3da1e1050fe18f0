//! Map-style home view: live spot list around a map center.
//!
//! Without a tile layer the "map" is the centered spot list; the center
//! still drives geolocation recentering and pre-fills the report form.

use dioxus::prelude::*;

use store::{feed::filter_by_category, CategoryFilter, FaokhaoConfig, FeedPhase};
use ui::{use_location_feed, CategoryFilterBar, LocationCard};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let config = use_resource(|| async { api::app_config().await.unwrap_or_default() });

    match config() {
        Some(cfg) => rsx! {
            MapHome { config: cfg }
        },
        None => rsx! {
            div { class: "page-loading", "লোড হচ্ছে... ⏳" }
        },
    }
}

#[component]
fn MapHome(config: FaokhaoConfig) -> Element {
    let feed = use_location_feed(config.feed.poll_interval_secs);
    let mut filter = use_signal(|| CategoryFilter::All);
    let center = use_signal(|| (config.map.center_lat, config.map.center_lng));
    let nav = use_navigator();

    let snapshot = feed();
    let visible = filter_by_category(&snapshot.locations, &filter());
    let (lat, lng) = center();

    rsx! {
        div {
            class: "page home",

            header {
                class: "page-header",
                h1 { "ফাও খাও 🍚" }
                p { class: "tagline", "ফ্রি খাবার কোথায়? কমিউনিটি জানে!" }
            }

            CategoryFilterBar {
                filter: filter(),
                on_change: move |f| filter.set(f),
            }

            div {
                class: "map-bar",
                span { class: "map-center", "📍 {lat:.4}, {lng:.4}" }
                button {
                    class: "locate-btn",
                    onclick: move |_| locate(center),
                    "আমার লোকেশন"
                }
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
                        div { class: "page-empty", "এই ক্যাটাগরিতে এখন কিছু নেই! 🍽️" }
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

            Link {
                class: "fab",
                to: Route::AddLocation { lat: Some(lat), lng: Some(lng) },
                "➕"
            }
        }
    }
}

/// One-shot geolocation recenter. Denied or unavailable positions are
/// ignored; the center keeps its configured default.
#[cfg(target_arch = "wasm32")]
fn locate(mut center: Signal<(f64, f64)>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(geolocation) = window.navigator().geolocation() else {
        return;
    };

    let on_position = Closure::<dyn FnMut(web_sys::Position)>::new(move |pos: web_sys::Position| {
        let coords = pos.coords();
        center.set((coords.latitude(), coords.longitude()));
    });
    let _ = geolocation.get_current_position(on_position.as_ref().unchecked_ref());
    on_position.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn locate(_center: Signal<(f64, f64)>) {}
