//! Detail view for one spot: photo, freshness, verification buttons,
//! comments and the directions hand-off.

use dioxus::prelude::*;

use store::{categories, ReviewKind};
use ui::{now_ms, time_ago, use_auth, use_notification, Notifier};

#[component]
pub fn LocationDetails(id: ReadOnlySignal<String>) -> Element {
    let auth = use_auth();
    let mut notifier = use_notification();

    let mut location = use_resource(move || async move { api::get_location(id()).await });
    let mut reviews =
        use_resource(move || async move { api::list_reviews(id()).await.unwrap_or_default() });

    let mut comment = use_signal(String::new);

    let mut verify = move |kind: ReviewKind| {
        if !auth().is_signed_in() {
            notifier.show("আগে লগইন করো ভাই! 🙏");
            return;
        }
        spawn(async move {
            match api::verify_location(id(), kind).await {
                Ok(_) => {
                    notifier.show(match kind {
                        ReviewKind::Verified => "ধন্যবাদ! তোমার ভেরিফিকেশন জমা হয়েছে। ✅",
                        ReviewKind::Fake => "জানানোর জন্য ধন্যবাদ! 🙏",
                    });
                    location.restart();
                    reviews.restart();
                }
                Err(e) => notifier.show(e.to_string()),
            }
        });
    };

    let submit_comment = move |_| {
        let text = comment().trim().to_string();
        if text.is_empty() {
            notifier.show("কিছু তো লেখো ভাই! 🤫");
            return;
        }
        spawn(async move {
            match api::add_comment(id(), text).await {
                Ok(_) => {
                    comment.set(String::new());
                    reviews.restart();
                }
                Err(e) => notifier.show(e.to_string()),
            }
        });
    };

    match location() {
        None => rsx! {
            div { class: "page-loading", "লোড হচ্ছে... ⏳" }
        },
        Some(Err(e)) => rsx! {
            div { class: "page-error", "ইশ! লোড করা গেলো না: {e}" }
        },
        Some(Ok(None)) => rsx! {
            div {
                class: "page-empty",
                p { "ধুর! খাবার তো খুঁজে পাইলাম না! 😫" }
                p { "হয়তো শেষ হয়ে গেছে, বা মুছে ফেলা হয়েছে।" }
            }
        },
        Some(Ok(Some(loc))) => {
            let now = now_ms();
            let expired = loc.is_expired(now);
            let label = loc.category_label().to_string();
            let color = categories::color(&loc.category);
            let posted = time_ago(now, loc.created_at);
            let (lat, lng, name) = (loc.lat, loc.lng, loc.name.clone());
            let (share_name, share_label) = (loc.name.clone(), label.clone());

            rsx! {
                div {
                    class: "page location-details",

                    div {
                        class: "detail-image",
                        img { src: "{loc.image_url}", alt: "{loc.name}" }
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
                        class: "detail-body",
                        h1 { "{loc.name}" }
                        p { class: "posted", "{posted} · {loc.user_name}" }
                        if let Some(details) = &loc.details {
                            p { class: "details-text", "{details}" }
                        }

                        div {
                            class: "counts",
                            span { class: "verified", "{loc.verified_count} জন বলছে সত্য ✅" }
                            span { class: "fake", "{loc.fake_count} জন বলছে ভুয়া ❌" }
                        }

                        div {
                            class: "verify-actions",
                            button {
                                class: "verify-btn",
                                onclick: move |_| verify(ReviewKind::Verified),
                                "খাবার আছে! ✅"
                            }
                            button {
                                class: "fake-btn",
                                onclick: move |_| verify(ReviewKind::Fake),
                                "শেষ / ভুয়া ❌"
                            }
                        }

                        div {
                            class: "handoff-actions",
                            button {
                                class: "directions-btn",
                                onclick: move |_| open_directions(lat, lng, name.clone()),
                                "রাস্তা দেখাও 🧭"
                            }
                            button {
                                class: "share-btn",
                                onclick: move |_| {
                                    share_spot(notifier, share_name.clone(), share_label.clone())
                                },
                                "শেয়ার করো 📤"
                            }
                        }
                    }

                    section {
                        class: "comments",
                        h2 { "কমিউনিটি কি বলছে 💬" }

                        div {
                            class: "comment-form",
                            input {
                                r#type: "text",
                                placeholder: "তোমার মতামত লেখো...",
                                value: comment(),
                                oninput: move |evt| comment.set(evt.value()),
                            }
                            button {
                                onclick: submit_comment,
                                "পাঠাও"
                            }
                        }

                        match reviews() {
                            None => rsx! {
                                p { class: "page-loading", "লোড হচ্ছে..." }
                            },
                            Some(list) if list.is_empty() => rsx! {
                                p { class: "page-empty", "এখনো কেউ কিছু বলেনি।" }
                            },
                            Some(list) => {
                                let rows: Vec<_> = list
                                    .into_iter()
                                    .map(|r| {
                                        let class = match r.kind {
                                            ReviewKind::Verified => "review verified",
                                            ReviewKind::Fake => "review fake",
                                        };
                                        let ago = time_ago(now, r.created_at);
                                        (r.id, class, r.user_name, r.comment, ago)
                                    })
                                    .collect();
                                rsx! {
                                    ul {
                                        class: "review-list",
                                        for (rid, class, author, text, ago) in rows {
                                            li {
                                                key: "{rid}",
                                                class: "{class}",
                                                p { class: "review-author", "{author}" }
                                                p { class: "review-comment", "{text}" }
                                                p { class: "review-time", "{ago}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Hand the spot off to a navigation app. Apple devices get Apple Maps;
/// everyone else gets a `geo:` URI with a timed web fallback in case no
/// installed app claims the scheme.
#[cfg(target_arch = "wasm32")]
fn open_directions(lat: f64, lng: f64, label: String) {
    use store::directions;

    let Some(window) = web_sys::window() else {
        return;
    };

    let ua = window.navigator().user_agent().unwrap_or_default();
    if ua.contains("iPhone") || ua.contains("iPad") || ua.contains("Macintosh") {
        let _ = window.location().set_href(&directions::apple_maps_url(lat, lng));
        return;
    }

    let _ = window
        .location()
        .set_href(&directions::geo_uri(lat, lng, &label));

    spawn(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(
            directions::GEO_FALLBACK_DELAY_MS as u64,
        ))
        .await;
        let _ = window.open_with_url_and_target(&directions::google_maps_url(lat, lng), "_blank");
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn open_directions(_lat: f64, _lng: f64, _label: String) {}

/// Share the spot through the native share sheet when the browser has one,
/// otherwise copy the link and say so. A dismissed sheet rejects with an
/// abort; that rejection is swallowed.
#[cfg(target_arch = "wasm32")]
fn share_spot(mut notifier: Notifier, name: String, category_label: String) {
    use store::directions;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(url) = window.location().href() else {
        return;
    };
    let navigator = window.navigator();

    let has_share = js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
        .map(|v| v.is_function())
        .unwrap_or(false);

    if has_share {
        let data = web_sys::ShareData::new();
        data.set_title(&name);
        data.set_text(&directions::share_text(&name, &category_label));
        data.set_url(&url);
        let promise = navigator.share_with_data(&data);
        spawn(async move {
            let _ = JsFuture::from(promise).await;
        });
    } else {
        let promise = navigator.clipboard().write_text(&url);
        spawn(async move {
            if JsFuture::from(promise).await.is_ok() {
                notifier.show("লিঙ্ক কপি হইছে, এখন বন্ধুদের পাঠাও! 🔗");
            }
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn share_spot(_notifier: Notifier, _name: String, _category_label: String) {}
