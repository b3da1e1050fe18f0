//! # API crate: shared fullstack server functions for Faokhao
//!
//! Every Dioxus server function the web frontend calls, plus the supporting
//! modules. Each public `async fn` here is annotated with `#[get(...)]` or
//! `#[post(...)]` and compiled twice: once with full server logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub.
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Argon2 password hashing, session key, write-time guards |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database rows and their client-safe projections |
//! | [`upload`] | `server` | Multipart image-upload proxy to the image host |
//!
//! Server functions:
//!
//! - **Authentication**: `get_current_user`, `register`, `login`, `logout`
//! - **Locations**: `list_locations`, `get_location`, `create_location`
//! - **Verification & reviews**: `verify_location`, `add_comment`, `list_reviews`
//! - **Aggregation**: `community_stats`, `my_stats`
//! - **Images**: `upload_image`
//! - **Admin**: `admin_list_users`, `admin_set_banned`, `admin_delete_location`

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

pub mod auth;
pub mod db;
pub mod models;
#[cfg(feature = "server")]
pub mod upload;

pub use models::UserInfo;
pub use store::{CommunityStats, FaokhaoConfig, LocationInfo, NewLocation, ReviewInfo, ReviewKind};

/// Per-user activity counters shown on the profile page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Locations this user has reported.
    pub shared: i64,
    /// Reviews/verifications this user has posted.
    pub reviewed: i64,
}

/// Moderation view of one user, for the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub locations: i64,
    pub reviews: i64,
    pub banned: bool,
}

#[cfg(feature = "server")]
fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Deploy-time app configuration (`faokhao.toml` next to the server binary,
/// or at `FAOKHAO_CONFIG`). Missing file means defaults.
#[cfg(feature = "server")]
#[get("/api/config")]
pub async fn app_config() -> Result<FaokhaoConfig, ServerFnError> {
    let path = std::env::var("FAOKHAO_CONFIG")
        .unwrap_or_else(|_| FaokhaoConfig::filename().to_string());

    match std::fs::read_to_string(&path) {
        Ok(raw) => FaokhaoConfig::from_toml(&raw).map_err(|e| ServerFnError::new(e.to_string())),
        Err(_) => Ok(FaokhaoConfig::default()),
    }
}

#[cfg(not(feature = "server"))]
#[get("/api/config")]
pub async fn app_config() -> Result<FaokhaoConfig, ServerFnError> {
    Ok(FaokhaoConfig::default())
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let user = auth::current_user(&session).await?;
    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new user with email and password.
///
/// The profile row doubles as the moderation record: `banned` starts false
/// and `is_admin` is seeded from the `ADMIN_EMAIL` environment variable.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("ইমেইলটা ঠিকঠাক দাও ভাই! 📧"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "পাসওয়ার্ড কমপক্ষে ৮ অক্ষরের হতে হবে! 🔒",
        ));
    }
    if name.is_empty() {
        return Err(ServerFnError::new(
            "তোমার নাম কি? নাম ছাড়া তো কেউ চিনবে না! 😂",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if user already exists
    let existing: Option<(i64,)> = sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "এই ইমেইলে আগে থেকেই একাউন্ট আছে! 🤔",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    let is_admin = std::env::var("ADMIN_EMAIL")
        .map(|admin| admin.trim().to_lowercase() == email)
        .unwrap_or(false);

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, name, password_hash, banned, is_admin, created_at)
         VALUES ($1, $2, $3, FALSE, $4, $5) RETURNING *",
    )
    .bind(&email)
    .bind(&name)
    .bind(&password_hash)
    .bind(is_admin)
    .bind(now_ms())
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("ইমেইল বা পাসওয়ার্ড ভুল! 🙈"));
    };

    let valid =
        auth::verify_password(&password, &user.password_hash).map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new("ইমেইল বা পাসওয়ার্ড ভুল! 🙈"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// Fetch a full snapshot of the locations collection.
///
/// `ordered = true` sorts newest-first; `false` is the fallback path the
/// feed state machine switches to when the ordered query returns nothing
/// or errors.
#[cfg(feature = "server")]
#[get("/api/locations")]
pub async fn list_locations(ordered: bool) -> Result<Vec<LocationInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::LocationRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let sql = if ordered {
        "SELECT * FROM locations ORDER BY created_at DESC"
    } else {
        "SELECT * FROM locations"
    };

    let rows: Vec<LocationRow> = sqlx::query_as(sql)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(LocationRow::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/locations")]
pub async fn list_locations(ordered: bool) -> Result<Vec<LocationInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch one location by id. `None` renders the not-found state; a stale
/// link to an admin-deleted spot is not an error.
#[cfg(feature = "server")]
#[get("/api/locations/:id")]
pub async fn get_location(id: String) -> Result<Option<LocationInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::LocationRow;

    // A malformed id can only come from a hand-edited URL; treat it as
    // not-found rather than a 500.
    let Ok(location_id) = uuid::Uuid::parse_str(&id) else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<LocationRow> = sqlx::query_as("SELECT * FROM locations WHERE id = $1")
        .bind(location_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|r| r.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/locations/:id")]
pub async fn get_location(id: String) -> Result<Option<LocationInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Report a new spot. Requires a signed-in, non-banned user and a photo.
#[cfg(feature = "server")]
#[post("/api/locations", session: tower_sessions::Session)]
pub async fn create_location(new: NewLocation) -> Result<LocationInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::LocationRow;

    let user = auth::require_active_user(&session).await?;

    new.validate().map_err(ServerFnError::new)?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: LocationRow = sqlx::query_as(
        "INSERT INTO locations
             (name, category, custom_category, details, image_url, lat, lng,
              created_at, user_id, user_name, verified_count, fake_count)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 0, 0)
         RETURNING *",
    )
    .bind(new.name.trim())
    .bind(&new.category)
    .bind(new.custom_category.as_deref().map(str::trim))
    .bind(&new.details)
    .bind(&new.image_url)
    .bind(new.lat)
    .bind(new.lng)
    .bind(now_ms())
    .bind(user.id)
    .bind(user.to_info().display_name())
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(location = %row.id, user = %user.id, "location reported");

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/locations")]
pub async fn create_location(new: NewLocation) -> Result<LocationInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Verification & reviews
// ---------------------------------------------------------------------------

/// Record a community verification ("still available") or dispute
/// ("finished / fake").
///
/// The counter moves via a SQL atomic increment, never a read-modify-write
/// from the client, and exactly one review row is appended per call.
/// Deliberately not idempotent: repeated taps keep counting.
#[cfg(feature = "server")]
#[post("/api/locations/verify", session: tower_sessions::Session)]
pub async fn verify_location(
    location_id: String,
    kind: ReviewKind,
) -> Result<LocationInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::LocationRow;

    let user = auth::require_active_user(&session).await?;

    let location_uuid = uuid::Uuid::parse_str(&location_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let column = match kind {
        ReviewKind::Verified => "verified_count",
        ReviewKind::Fake => "fake_count",
    };

    let row: Option<LocationRow> = sqlx::query_as(&format!(
        "UPDATE locations SET {column} = {column} + 1 WHERE id = $1 RETURNING *"
    ))
    .bind(location_uuid)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(row) = row else {
        return Err(ServerFnError::new(
            "ধুর! খাবার তো খুঁজে পাইলাম না! 😫",
        ));
    };

    sqlx::query(
        "INSERT INTO reviews (location_id, user_id, user_name, kind, comment, created_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(location_uuid)
    .bind(user.id)
    .bind(user.to_info().display_name())
    .bind(kind.as_str())
    .bind(kind.default_comment())
    .bind(now_ms())
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/locations/verify")]
pub async fn verify_location(
    location_id: String,
    kind: ReviewKind,
) -> Result<LocationInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Post a free-text comment on a location. Recorded as a `verified`-kind
/// review without touching the counters.
#[cfg(feature = "server")]
#[post("/api/reviews", session: tower_sessions::Session)]
pub async fn add_comment(
    location_id: String,
    comment: String,
) -> Result<ReviewInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ReviewRow;

    let user = auth::require_active_user(&session).await?;

    let comment = comment.trim().to_string();
    if comment.is_empty() {
        return Err(ServerFnError::new("কিছু তো লেখো ভাই! 🤫"));
    }

    let location_uuid = uuid::Uuid::parse_str(&location_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: ReviewRow = sqlx::query_as(
        "INSERT INTO reviews (location_id, user_id, user_name, kind, comment, created_at)
         VALUES ($1, $2, $3, 'verified', $4, $5) RETURNING *",
    )
    .bind(location_uuid)
    .bind(user.id)
    .bind(user.to_info().display_name())
    .bind(&comment)
    .bind(now_ms())
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/reviews")]
pub async fn add_comment(
    location_id: String,
    comment: String,
) -> Result<ReviewInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Reviews for one location, newest first.
#[cfg(feature = "server")]
#[get("/api/reviews/:location_id")]
pub async fn list_reviews(location_id: String) -> Result<Vec<ReviewInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ReviewRow;

    let Ok(location_uuid) = uuid::Uuid::parse_str(&location_id) else {
        return Ok(Vec::new());
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<ReviewRow> =
        sqlx::query_as("SELECT * FROM reviews WHERE location_id = $1 ORDER BY created_at DESC")
            .bind(location_uuid)
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(ReviewRow::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/reviews/:location_id")]
pub async fn list_reviews(location_id: String) -> Result<Vec<ReviewInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Community impact numbers: one-shot fetch of all locations, grouped and
/// ranked in [`store::leaderboard`]. Not a live subscription.
#[cfg(feature = "server")]
#[get("/api/community/stats")]
pub async fn community_stats() -> Result<CommunityStats, ServerFnError> {
    let locations = list_locations(false).await?;
    Ok(store::leaderboard::aggregate(&locations))
}

#[cfg(not(feature = "server"))]
#[get("/api/community/stats")]
pub async fn community_stats() -> Result<CommunityStats, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The calling user's own contribution counters.
#[cfg(feature = "server")]
#[get("/api/profile/stats", session: tower_sessions::Session)]
pub async fn my_stats() -> Result<ProfileStats, ServerFnError> {
    use crate::db::get_pool;

    let user = auth::require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (shared,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM locations WHERE user_id = $1")
        .bind(user.id)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (reviewed,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reviews WHERE user_id = $1")
        .bind(user.id)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(ProfileStats { shared, reviewed })
}

#[cfg(not(feature = "server"))]
#[get("/api/profile/stats")]
pub async fn my_stats() -> Result<ProfileStats, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// Upload an image through the server-side proxy and get its public URL.
/// The access key stays on the server.
#[cfg(feature = "server")]
#[post("/api/upload", session: tower_sessions::Session)]
pub async fn upload_image(data: Vec<u8>, filename: String) -> Result<String, ServerFnError> {
    auth::require_active_user(&session).await?;

    if data.is_empty() {
        return Err(ServerFnError::new(
            "একটা ছবি তো দাও ভাই, মানুষ বিশ্বাস করবে কেমনে? 📸",
        ));
    }

    upload::upload_image(data, filename).await.map_err(|e| {
        tracing::error!("image upload failed: {e}");
        ServerFnError::new("ধুর! কি জানি হইলো, আপলোড হইলো না। আবার ট্রাই করো। 😫")
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/upload")]
pub async fn upload_image(data: Vec<u8>, filename: String) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// All users with their contribution counts, for the moderation panel.
#[cfg(feature = "server")]
#[get("/api/admin/users", session: tower_sessions::Session)]
pub async fn admin_list_users() -> Result<Vec<AdminUserInfo>, ServerFnError> {
    use std::collections::HashMap;

    use crate::db::get_pool;
    use crate::models::User;

    auth::require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let users: Vec<User> = sqlx::query_as("SELECT * FROM users ORDER BY created_at")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let location_counts: Vec<(uuid::Uuid, i64)> =
        sqlx::query_as("SELECT user_id, COUNT(*) FROM locations GROUP BY user_id")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let review_counts: Vec<(uuid::Uuid, i64)> =
        sqlx::query_as("SELECT user_id, COUNT(*) FROM reviews GROUP BY user_id")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let location_counts: HashMap<_, _> = location_counts.into_iter().collect();
    let review_counts: HashMap<_, _> = review_counts.into_iter().collect();

    Ok(users
        .into_iter()
        .map(|u| AdminUserInfo {
            locations: location_counts.get(&u.id).copied().unwrap_or(0),
            reviews: review_counts.get(&u.id).copied().unwrap_or(0),
            id: u.id.to_string(),
            name: u.name,
            email: u.email,
            banned: u.banned,
        })
        .collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/users")]
pub async fn admin_list_users() -> Result<Vec<AdminUserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Toggle the banned flag on a profile. Existing content stays.
#[cfg(feature = "server")]
#[post("/api/admin/ban", session: tower_sessions::Session)]
pub async fn admin_set_banned(user_id: String, banned: bool) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let admin = auth::require_admin(&session).await?;

    let target = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE users SET banned = $1 WHERE id = $2")
        .bind(banned)
        .bind(target)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(admin = %admin.id, user = %target, banned, "ban flag updated");

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/ban")]
pub async fn admin_set_banned(user_id: String, banned: bool) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a location outright. Its reviews are left orphaned; readers
/// tolerate that and never display them.
#[cfg(feature = "server")]
#[post("/api/admin/locations/delete", session: tower_sessions::Session)]
pub async fn admin_delete_location(location_id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let admin = auth::require_admin(&session).await?;

    let target = uuid::Uuid::parse_str(&location_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM locations WHERE id = $1")
        .bind(target)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(admin = %admin.id, location = %target, "location deleted");

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/locations/delete")]
pub async fn admin_delete_location(location_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
