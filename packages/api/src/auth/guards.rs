//! # Write-time authorization guards
//!
//! Every mutating server function runs through one of these before touching
//! the database: session → user row → moderation flags. Rejections are
//! user-facing messages carried in `ServerFnError`; no write happens after
//! a rejection.

use dioxus::prelude::ServerFnError;
use uuid::Uuid;

use crate::auth::SESSION_USER_ID_KEY;
use crate::db::get_pool;
use crate::models::User;

/// Load the current user from the session, if any. A session without a
/// user id is an anonymous/guest visitor.
pub async fn current_user(
    session: &tower_sessions::Session,
) -> Result<Option<User>, ServerFnError> {
    let user_id: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let user_uuid =
        Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user)
}

/// Require a signed-in, registered user. Anonymous visitors are rejected
/// before any write is attempted.
pub async fn require_user(session: &tower_sessions::Session) -> Result<User, ServerFnError> {
    current_user(session)
        .await?
        .ok_or_else(|| ServerFnError::new(store::WriteDenied::NotSignedIn.message()))
}

/// Require a signed-in user whose profile is not banned. The banned flag is
/// looked up fresh on every call so a mid-session ban takes effect
/// immediately.
pub async fn require_active_user(
    session: &tower_sessions::Session,
) -> Result<User, ServerFnError> {
    let user = current_user(session).await?;
    store::check_write_access(user.as_ref().map(|u| u.banned))
        .map_err(|denied| ServerFnError::new(denied.message()))?;
    user.ok_or_else(|| ServerFnError::new(store::WriteDenied::NotSignedIn.message()))
}

/// Require the admin role flag on the caller's profile.
pub async fn require_admin(session: &tower_sessions::Session) -> Result<User, ServerFnError> {
    let user = require_user(session).await?;
    if !user.is_admin {
        return Err(ServerFnError::new("এটা শুধু এডমিনের জায়গা! 👑"));
    }
    Ok(user)
}
