//! App shell: page outlet plus the fixed bottom navigation bar.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Shell() -> Element {
    let route = use_route::<Route>();

    let tab = |target: Route, icon: &'static str, label: &'static str| {
        let active = route == target;
        rsx! {
            Link {
                class: if active { "nav-tab active" } else { "nav-tab" },
                to: target,
                span { class: "nav-icon", "{icon}" }
                span { class: "nav-label", "{label}" }
            }
        }
    };

    rsx! {
        div {
            class: "shell",

            main {
                class: "shell-main",
                Outlet::<Route> {}
            }

            nav {
                class: "bottom-nav",
                {tab(Route::Home {}, "🗺️", "ম্যাপ")}
                {tab(Route::Feed {}, "📰", "ফিড")}
                {tab(Route::AddLocation { lat: None, lng: None }, "➕", "শেয়ার")}
                {tab(Route::Community {}, "🏆", "কমিউনিটি")}
                {tab(Route::Profile {}, "👤", "প্রোফাইল")}
            }
        }
    }
}
