//! Authentication context and hooks for the UI.
//!
//! One subscription at the application root keeps the session state fresh;
//! every view reads it through [`use_auth`] instead of poking at global
//! auth state ad hoc.

use api::UserInfo;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
    /// Whether the server was reachable on the last check.
    pub online: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            online: false,
        }
    }
}

impl AuthState {
    /// Signed in with a registered (non-anonymous) identity.
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// The admin panel is only offered to profiles carrying the role flag.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    user,
                    loading: false,
                    online: true,
                });
            }
            Err(_) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                    online: false,
                });
            }
        }
    });

    // Periodic session refresh (every 30s): picks up bans and expired
    // sessions without a reload.
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;

                if auth_state().loading {
                    continue;
                }
                match api::get_current_user().await {
                    Ok(user) => {
                        let current = auth_state();
                        if current.user != user || !current.online {
                            auth_state.set(AuthState {
                                user,
                                loading: false,
                                online: true,
                            });
                        }
                    }
                    Err(_) => {
                        if auth_state().online {
                            let current = auth_state();
                            auth_state.set(AuthState {
                                online: false,
                                ..current
                            });
                        }
                    }
                }
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "বাইরে চলো (টাটা!) 👋".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                    online: auth_state().online,
                });
            }
            Err(e) => {
                tracing::error!("logout failed: {e}");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
