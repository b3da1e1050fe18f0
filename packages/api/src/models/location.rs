//! Location row loaded from the `locations` table (server only).

use sqlx::FromRow;
use uuid::Uuid;

use store::LocationInfo;

/// Full `locations` row. Counters only ever move up, via the SQL atomic
/// increment in `verify_location`.
#[derive(Debug, Clone, FromRow)]
pub struct LocationRow {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub custom_category: Option<String>,
    pub details: Option<String>,
    pub image_url: String,
    pub lat: f64,
    pub lng: f64,
    /// Epoch milliseconds.
    pub created_at: i64,
    pub user_id: Uuid,
    pub user_name: String,
    pub verified_count: i64,
    pub fake_count: i64,
}

impl LocationRow {
    /// Convert to the client-safe shape (UUIDs become strings for WASM).
    pub fn to_info(&self) -> LocationInfo {
        LocationInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            category: self.category.clone(),
            custom_category: self.custom_category.clone(),
            details: self.details.clone(),
            image_url: self.image_url.clone(),
            lat: self.lat,
            lng: self.lng,
            created_at: self.created_at,
            user_id: self.user_id.to_string(),
            user_name: self.user_name.clone(),
            verified_count: self.verified_count,
            fake_count: self.fake_count,
        }
    }
}
