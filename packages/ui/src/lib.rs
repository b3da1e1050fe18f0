//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod notification;
pub use notification::{use_notification, NotificationProvider, Notifier};

mod feed;
pub use feed::use_location_feed;

mod location_card;
pub use location_card::LocationCard;

mod category_picker;
pub use category_picker::{CategoryFilterBar, CategoryPicker};

mod time;
pub use time::{now_ms, time_ago};
