//! Transient toast notifications.
//!
//! Every user-visible outcome, success or failure, ends in one of these.
//! There is no persistent error log and no retry queue; the toast is
//! dismissible and replaced by the next message.

use dioxus::prelude::*;

/// Handle for showing notifications from any descendant component.
#[derive(Clone, Copy)]
pub struct Notifier {
    message: Signal<Option<String>>,
}

impl Notifier {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message.set(Some(message.into()));
    }

    pub fn hide(&mut self) {
        self.message.set(None);
    }
}

/// Get the notifier from context.
pub fn use_notification() -> Notifier {
    use_context::<Notifier>()
}

/// Provider component that owns the toast overlay. Wrap the app with it.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let message = use_signal(|| Option::<String>::None);
    let mut notifier = use_context_provider(|| Notifier { message });

    rsx! {
        {children}

        if let Some(msg) = message() {
            div {
                class: "toast-overlay",
                div {
                    class: "toast",
                    p { "{msg}" }
                    button {
                        onclick: move |_| notifier.hide(),
                        "OK"
                    }
                }
            }
        }
    }
}
