//! # User profile model
//!
//! Two representations of a Faokhao account:
//!
//! - [`User`] (server only): the full `users` row, including the Argon2
//!   password hash and moderation flags. Derives [`sqlx::FromRow`].
//! - [`UserInfo`]: the client-safe projection crossing the server/client
//!   boundary. Carries the moderation flags the UI needs (a banned user
//!   sees write actions rejected; an admin sees the admin panel entry) but
//!   never the password hash.
//!
//! The `banned` flag is checked server-side before every mutating action;
//! `is_admin` replaces a hardcoded privileged email with a role flag on the
//! profile record, seeded at registration from the `ADMIN_EMAIL` env var.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub banned: bool,
    pub is_admin: bool,
    /// Epoch milliseconds.
    pub created_at: i64,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            banned: self.banned,
            is_admin: self.is_admin,
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    pub banned: bool,
    pub is_admin: bool,
}

impl UserInfo {
    /// Get display name, falling back to email if the name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_email() {
        let info = UserInfo {
            id: "x".into(),
            email: "samir@example.com".into(),
            name: "  ".into(),
            banned: false,
            is_admin: false,
        };
        assert_eq!(info.display_name(), "samir@example.com");
    }
}
