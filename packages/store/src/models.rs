//! # Domain models for locations and reviews
//!
//! The client-safe shapes that cross the server/client boundary via Dioxus
//! server functions. Rows loaded from the database live in the `api` crate;
//! these structs carry only what the UI renders.
//!
//! Timestamps are integer milliseconds since the Unix epoch throughout, so
//! the same expiry arithmetic runs identically on the server and in WASM.

use serde::{Deserialize, Serialize};

use crate::categories;

/// How long a reported spot stays "fresh": 24 hours in milliseconds.
pub const EXPIRY_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// A spot is expired strictly after the window elapses. At exactly
/// `EXPIRY_WINDOW_MS` of age it is still active.
pub fn is_expired(now_ms: i64, created_at_ms: i64) -> bool {
    now_ms - created_at_ms > EXPIRY_WINDOW_MS
}

/// A reported food spot as shown in the feed, on the map and in detail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub id: String,
    pub name: String,
    /// Category id: one of [`crate::CATEGORIES`] or a raw string from an
    /// older client.
    pub category: String,
    /// Free-text label, meaningful only when `category == "custom"`.
    pub custom_category: Option<String>,
    pub details: Option<String>,
    pub image_url: String,
    pub lat: f64,
    pub lng: f64,
    /// Epoch milliseconds.
    pub created_at: i64,
    pub user_id: String,
    pub user_name: String,
    pub verified_count: i64,
    pub fake_count: i64,
}

impl LocationInfo {
    /// Derived at render time, never stored.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        is_expired(now_ms, self.created_at)
    }

    /// Resolved display label for the category chip.
    pub fn category_label(&self) -> &str {
        categories::display_label(&self.category, self.custom_category.as_deref())
    }
}

/// Payload for creating a location. The server stamps id, author identity,
/// creation time and zeroed counters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub category: String,
    pub custom_category: Option<String>,
    pub details: Option<String>,
    pub image_url: String,
    pub lat: f64,
    pub lng: f64,
}

impl NewLocation {
    /// Validate the form fields that must be caught before any network
    /// write. Returns a user-facing message on failure.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("জায়গার নাম তো দাও ভাই! 📝");
        }
        if self.category.trim().is_empty() {
            return Err("একটা ক্যাটাগরি বেছে নাও! 🤔");
        }
        if self.category == "custom"
            && self
                .custom_category
                .as_deref()
                .map(str::trim)
                .unwrap_or("")
                .is_empty()
        {
            return Err("কাস্টম ক্যাটাগরির নাম দাও! ✨");
        }
        if self.image_url.trim().is_empty() {
            return Err("একটা ছবি তো দাও ভাই, মানুষ বিশ্বাস করবে কেমনে? 📸");
        }
        Ok(())
    }
}

/// Why a community write was refused before reaching the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteDenied {
    NotSignedIn,
    Banned,
}

impl WriteDenied {
    /// User-facing rejection message.
    pub fn message(self) -> &'static str {
        match self {
            WriteDenied::NotSignedIn => "আরে ভাই! আগে লগইন তো করো! 🤦‍♂️",
            WriteDenied::Banned => "ধুর! তুমি তো ব্যান খাইছো! কিছু করতে পারবা না। 🚫",
        }
    }
}

/// Moderation precondition shared by every mutating operation: the caller
/// must be signed in and not banned. `profile` is `None` for a guest,
/// `Some(banned)` for a loaded profile. Nothing is written on `Err`.
pub fn check_write_access(profile: Option<bool>) -> Result<(), WriteDenied> {
    match profile {
        None => Err(WriteDenied::NotSignedIn),
        Some(true) => Err(WriteDenied::Banned),
        Some(false) => Ok(()),
    }
}

/// The two kinds of community verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewKind {
    Verified,
    Fake,
}

impl ReviewKind {
    /// Stable string stored in the `kind` column.
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewKind::Verified => "verified",
            ReviewKind::Fake => "fake",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "verified" => Some(ReviewKind::Verified),
            "fake" => Some(ReviewKind::Fake),
            _ => None,
        }
    }

    /// Canned comment used when the action is a one-tap verification
    /// rather than a typed comment.
    pub fn default_comment(self) -> &'static str {
        match self {
            ReviewKind::Verified => "হ্যাঁ ভাই! আমি নিজে দেখে আসছি, খাবার আছে! 😋",
            ReviewKind::Fake => "ধুর মিয়া! গিয়ে দেখি কিছুই নাই, সব শেষ! 😫",
        }
    }
}

/// A comment or verification event attached to a location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewInfo {
    pub id: String,
    pub location_id: String,
    pub user_id: String,
    pub user_name: String,
    pub kind: ReviewKind,
    pub comment: String,
    /// Epoch milliseconds.
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_location() -> LocationInfo {
        LocationInfo {
            id: "loc-1".into(),
            name: "ফেনীতে বিরিয়ানি".into(),
            category: "biriyani".into(),
            custom_category: None,
            details: None,
            image_url: "https://i.ibb.co/x/food.jpg".into(),
            lat: 23.8103,
            lng: 90.4125,
            created_at: 1_000_000,
            user_id: "u-1".into(),
            user_name: "Samir".into(),
            verified_count: 0,
            fake_count: 0,
        }
    }

    #[test]
    fn expiry_is_strict_greater_than() {
        let created = 1_000_000;
        // Exactly 24h of age is NOT expired.
        assert!(!is_expired(created + EXPIRY_WINDOW_MS, created));
        // One millisecond past the window is.
        assert!(is_expired(created + EXPIRY_WINDOW_MS + 1, created));
        // A fresh record is not.
        assert!(!is_expired(created, created));
    }

    #[test]
    fn location_expiry_uses_created_at() {
        let loc = sample_location();
        assert!(!loc.is_expired(loc.created_at + EXPIRY_WINDOW_MS));
        assert!(loc.is_expired(loc.created_at + EXPIRY_WINDOW_MS + 1));
    }

    #[test]
    fn custom_category_label_never_shows_raw_custom() {
        let mut loc = sample_location();
        loc.category = "custom".into();
        loc.custom_category = Some("Biriyani Mela".into());
        assert_eq!(loc.category_label(), "Biriyani Mela");
    }

    #[test]
    fn new_location_requires_image() {
        let new = NewLocation {
            name: "x".into(),
            category: "tran".into(),
            custom_category: None,
            details: None,
            image_url: "".into(),
            lat: 0.0,
            lng: 0.0,
        };
        assert!(new.validate().is_err());
    }

    #[test]
    fn new_location_custom_requires_label() {
        let mut new = NewLocation {
            name: "x".into(),
            category: "custom".into(),
            custom_category: None,
            details: None,
            image_url: "https://img".into(),
            lat: 0.0,
            lng: 0.0,
        };
        assert!(new.validate().is_err());
        new.custom_category = Some("Biriyani Mela".into());
        assert!(new.validate().is_ok());
    }

    #[test]
    fn guests_and_banned_users_cannot_write() {
        assert_eq!(check_write_access(None), Err(WriteDenied::NotSignedIn));
        assert_eq!(check_write_access(Some(true)), Err(WriteDenied::Banned));
        assert_eq!(check_write_access(Some(false)), Ok(()));
    }

    #[test]
    fn review_kind_round_trips_column_value() {
        assert_eq!(ReviewKind::from_str("verified"), Some(ReviewKind::Verified));
        assert_eq!(ReviewKind::from_str("fake"), Some(ReviewKind::Fake));
        assert_eq!(ReviewKind::from_str("bogus"), None);
        assert_eq!(ReviewKind::Verified.as_str(), "verified");
    }
}
