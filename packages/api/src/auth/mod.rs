//! Authentication: password hashing and session-backed guards.

#[cfg(feature = "server")]
mod guards;
#[cfg(feature = "server")]
mod password;

#[cfg(feature = "server")]
pub use guards::{current_user, require_active_user, require_admin, require_user};
#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};

/// Key for storing the user ID in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";
