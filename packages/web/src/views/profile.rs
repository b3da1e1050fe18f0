//! Profile page: sign-in and registration when logged out, contribution
//! stats and account actions when logged in.

use dioxus::prelude::*;

use ui::{use_auth, use_notification, AuthState, LogoutButton};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();

    if auth().loading {
        return rsx! {
            div { class: "page-loading", "লোড হচ্ছে... ⏳" }
        };
    }

    match auth().user {
        Some(_) => rsx! {
            SignedInProfile {}
        },
        None => rsx! {
            AuthForms {}
        },
    }
}

#[component]
fn SignedInProfile() -> Element {
    let auth = use_auth();
    let stats = use_resource(|| async { api::my_stats().await });

    let Some(user) = auth().user else {
        return rsx! {
            div { class: "page-loading", "লোড হচ্ছে... ⏳" }
        };
    };
    let display_name = user.display_name().to_string();

    rsx! {
        div {
            class: "page profile",

            header {
                class: "page-header",
                h1 { "তোমার প্রোফাইল 👤" }
            }

            div {
                class: "profile-card",
                h2 { "{display_name}" }
                p { class: "profile-email", "{user.email}" }
                if user.is_admin {
                    span { class: "admin-badge", "অ্যাডমিন 🛡️" }
                }
            }

            match stats() {
                None => rsx! {
                    div { class: "page-loading", "হিসাব করছি..." }
                },
                Some(Err(e)) => rsx! {
                    div { class: "page-error", "স্ট্যাটস আনা গেলো না: {e}" }
                },
                Some(Ok(stats)) => rsx! {
                    div {
                        class: "stat-tiles",
                        div {
                            class: "stat-tile",
                            span { class: "stat-number", "{stats.shared}" }
                            span { class: "stat-label", "খাবার শেয়ার" }
                        }
                        div {
                            class: "stat-tile",
                            span { class: "stat-number", "{stats.reviewed}" }
                            span { class: "stat-label", "রিভিউ" }
                        }
                    }
                },
            }

            if auth().is_admin() {
                Link {
                    class: "admin-link",
                    to: Route::Admin {},
                    "অ্যাডমিন প্যানেল 🛡️"
                }
            }

            LogoutButton { class: "logout-btn" }
        }
    }
}

#[component]
fn AuthForms() -> Element {
    let mut auth = use_auth();
    let mut notifier = use_notification();

    let mut registering = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let result = if registering() {
                api::register(email(), password(), name()).await
            } else {
                api::login(email(), password()).await
            };
            busy.set(false);
            match result {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                        online: true,
                    });
                }
                Err(e) => notifier.show(e.to_string()),
            }
        });
    };

    rsx! {
        div {
            class: "page profile",

            header {
                class: "page-header",
                h1 { "ফাও খাও 🍚" }
                p { class: "tagline", "ভেতরে এসো, খাবার শেয়ার করো!" }
            }

            div {
                class: "auth-tabs",
                button {
                    class: if !registering() { "auth-tab selected" } else { "auth-tab" },
                    onclick: move |_| registering.set(false),
                    "লগইন"
                }
                button {
                    class: if registering() { "auth-tab selected" } else { "auth-tab" },
                    onclick: move |_| registering.set(true),
                    "নতুন একাউন্ট"
                }
            }

            div {
                class: "auth-form",

                if registering() {
                    div {
                        class: "form-field",
                        label { "তোমার নাম" }
                        input {
                            r#type: "text",
                            placeholder: "যে নামে সবাই চিনবে",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { "ইমেইল" }
                    input {
                        r#type: "email",
                        placeholder: "tumi@example.com",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "পাসওয়ার্ড" }
                    input {
                        r#type: "password",
                        placeholder: "কমপক্ষে ৮ অক্ষর",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    class: "primary submit-btn",
                    disabled: busy(),
                    onclick: submit,
                    if busy() {
                        "একটু দাঁড়াও... ⏳"
                    } else if registering() {
                        "একাউন্ট খোলো 🎉"
                    } else {
                        "ভেতরে ঢোকো 🚪"
                    }
                }
            }
        }
    }
}
