//! Moderation panel: user search with ban toggles, and location removal.
//!
//! The gate here is cosmetic routing only; every admin server function
//! re-checks the role flag on its own session.

use dioxus::prelude::*;

use ui::{use_auth, use_notification};

use crate::Route;

#[component]
pub fn Admin() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut notifier = use_notification();

    use_effect(move || {
        let state = auth();
        if !state.loading && !state.is_admin() {
            nav.replace(Route::Home {});
        }
    });

    let mut users = use_resource(|| async { api::admin_list_users().await });
    let mut locations = use_resource(|| async { api::list_locations(true).await });
    let mut search = use_signal(String::new);

    let mut set_banned = move |user_id: String, banned: bool| {
        spawn(async move {
            match api::admin_set_banned(user_id, banned).await {
                Ok(()) => {
                    notifier.show(if banned {
                        "ব্যান করা হলো। 🚫"
                    } else {
                        "ব্যান তুলে নেওয়া হলো। ✅"
                    });
                    users.restart();
                }
                Err(e) => notifier.show(e.to_string()),
            }
        });
    };

    let mut delete_location = move |location_id: String| {
        spawn(async move {
            match api::admin_delete_location(location_id).await {
                Ok(()) => {
                    notifier.show("লোকেশন মুছে ফেলা হয়েছে। 🗑️");
                    locations.restart();
                }
                Err(e) => notifier.show(e.to_string()),
            }
        });
    };

    rsx! {
        div {
            class: "page admin",

            header {
                class: "page-header",
                h1 { "অ্যাডমিন প্যানেল 🛡️" }
            }

            section {
                class: "admin-users",
                h2 { "ইউজার ম্যানেজমেন্ট" }

                input {
                    r#type: "search",
                    class: "admin-search",
                    placeholder: "নাম বা ইমেইল দিয়ে খোঁজো...",
                    value: search(),
                    oninput: move |evt| search.set(evt.value()),
                }

                match users() {
                    None => rsx! {
                        p { class: "page-loading", "লোড হচ্ছে..." }
                    },
                    Some(Err(e)) => rsx! {
                        p { class: "page-error", "ইউজার লিস্ট আনা গেলো না: {e}" }
                    },
                    Some(Ok(list)) => {
                        let query = search().trim().to_lowercase();
                        let matching: Vec<_> = list
                            .into_iter()
                            .filter(|u| {
                                query.is_empty()
                                    || u.name.to_lowercase().contains(&query)
                                    || u.email.to_lowercase().contains(&query)
                            })
                            .map(|u| {
                                let counts = format!(
                                    "{} টা লোকেশন · {} টা রিভিউ",
                                    u.locations, u.reviews
                                );
                                (u.id, u.name, u.email, counts, u.banned)
                            })
                            .collect();
                        rsx! {
                            ul {
                                class: "admin-user-list",
                                for (id, name, email, counts, banned) in matching {
                                    li {
                                        key: "{id}",
                                        class: if banned { "admin-user banned" } else { "admin-user" },
                                        div {
                                            class: "admin-user-meta",
                                            p { class: "admin-user-name", "{name}" }
                                            p { class: "admin-user-email", "{email}" }
                                            p { class: "admin-user-counts", "{counts}" }
                                        }
                                        button {
                                            class: if banned { "unban-btn" } else { "ban-btn" },
                                            onclick: move |_| set_banned(id.clone(), !banned),
                                            if banned { "ব্যান তোলো" } else { "ব্যান করো" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "admin-locations",
                h2 { "লোকেশন ম্যানেজমেন্ট" }

                match locations() {
                    None => rsx! {
                        p { class: "page-loading", "লোড হচ্ছে..." }
                    },
                    Some(Err(e)) => rsx! {
                        p { class: "page-error", "লোকেশন লিস্ট আনা গেলো না: {e}" }
                    },
                    Some(Ok(list)) => rsx! {
                        ul {
                            class: "admin-location-list",
                            for location in list {
                                li {
                                    key: "{location.id}",
                                    class: "admin-location",
                                    img { src: "{location.image_url}", alt: "{location.name}" }
                                    div {
                                        class: "admin-location-meta",
                                        p { class: "admin-location-name", "{location.name}" }
                                        p {
                                            class: "admin-location-counts",
                                            "✅ {location.verified_count} · ❌ {location.fake_count} · {location.user_name}"
                                        }
                                    }
                                    button {
                                        class: "delete-btn",
                                        onclick: move |_| delete_location(location.id.clone()),
                                        "মুছে ফেলো 🗑️"
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
