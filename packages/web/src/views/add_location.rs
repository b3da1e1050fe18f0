//! Report form: photo, name, category, details, coordinates.

use dioxus::prelude::*;

use store::{FaokhaoConfig, NewLocation};
use ui::{use_auth, use_notification, CategoryPicker};

use crate::Route;

#[component]
pub fn AddLocation(lat: Option<f64>, lng: Option<f64>) -> Element {
    let auth = use_auth();
    let mut notifier = use_notification();
    let nav = use_navigator();

    let config = use_resource(|| async { api::app_config().await.unwrap_or_default() });

    let mut name = use_signal(String::new);
    let mut category = use_signal(|| "free_khana".to_string());
    let mut custom_category = use_signal(String::new);
    let mut details = use_signal(String::new);
    let mut image = use_signal(|| Option::<(Vec<u8>, String)>::None);
    let mut submitting = use_signal(|| false);

    let pick_image = move |evt: FormEvent| async move {
        if let Some(file) = evt.files().into_iter().next() {
            match file.read_bytes().await {
                Ok(bytes) => image.set(Some((bytes.to_vec(), file.name()))),
                Err(e) => {
                    tracing::error!("reading picked file failed: {e}");
                    notifier.show("ছবিটা পড়া গেলো না, আরেকটা ট্রাই করো! 📸");
                }
            }
        }
    };

    let submit = move |_| {
        if submitting() {
            return;
        }
        if !auth().is_signed_in() {
            notifier.show("আগে লগইন করো ভাই! 🙏");
            nav.push(Route::Profile {});
            return;
        }
        let Some((data, filename)) = image() else {
            notifier.show("একটা ছবি তো দাও ভাই, মানুষ বিশ্বাস করবে কেমনে? 📸");
            return;
        };

        let center = config()
            .map(|c| c.map)
            .unwrap_or_else(|| FaokhaoConfig::default().map);
        let spot_lat = lat.unwrap_or(center.center_lat);
        let spot_lng = lng.unwrap_or(center.center_lng);

        submitting.set(true);
        spawn(async move {
            let result = async {
                let image_url = api::upload_image(data, filename).await?;

                let new = NewLocation {
                    name: name(),
                    category: category(),
                    custom_category: if category() == "custom" {
                        Some(custom_category())
                    } else {
                        None
                    },
                    details: {
                        let d = details().trim().to_string();
                        if d.is_empty() { None } else { Some(d) }
                    },
                    image_url,
                    lat: spot_lat,
                    lng: spot_lng,
                };
                new.validate().map_err(ServerFnError::new)?;

                api::create_location(new).await
            }
            .await;

            submitting.set(false);
            match result {
                Ok(location) => {
                    notifier.show("ধন্যবাদ ভাই! তোমার জন্য কেউ আজ পেট ভরে খাবে! 🙏");
                    nav.push(Route::LocationDetails { id: location.id });
                }
                Err(e) => notifier.show(e.to_string()),
            }
        });
    };

    rsx! {
        div {
            class: "page add-location",

            header {
                class: "page-header",
                h1 { "খাবার শেয়ার করো 🍛" }
            }

            div {
                class: "report-form",

                div {
                    class: "form-field",
                    label { "ছবি (প্রমাণ লাগবে!) 📸" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        onchange: pick_image,
                    }
                    if let Some((_, filename)) = image() {
                        p { class: "file-note", "ছবি নেওয়া হয়েছে: {filename} ✅" }
                    }
                }

                div {
                    class: "form-field",
                    label { "জায়গার নাম" }
                    input {
                        r#type: "text",
                        placeholder: "যেমন: টিএসসি মোড়",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "কি খাবার?" }
                    CategoryPicker {
                        selected: category(),
                        on_select: move |id| category.set(id),
                    }
                    if category() == "custom" {
                        input {
                            r#type: "text",
                            placeholder: "নিজের ক্যাটাগরি লেখো ✨",
                            value: custom_category(),
                            oninput: move |evt| custom_category.set(evt.value()),
                        }
                    }
                }

                div {
                    class: "form-field",
                    label { "বিস্তারিত (ইচ্ছা হলে)" }
                    textarea {
                        placeholder: "কখন পর্যন্ত থাকবে, কেমন লাইন...",
                        value: details(),
                        oninput: move |evt| details.set(evt.value()),
                    }
                }

                button {
                    class: "primary submit-btn",
                    disabled: submitting(),
                    onclick: submit,
                    if submitting() { "পাঠাচ্ছি... ⏳" } else { "শেয়ার করো! 🚀" }
                }
            }
        }
    }
}
