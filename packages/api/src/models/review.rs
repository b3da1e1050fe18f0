//! Review row loaded from the `reviews` table (server only).

use sqlx::FromRow;
use uuid::Uuid;

use store::{ReviewInfo, ReviewKind};

/// Full `reviews` row. Immutable once written; a review whose location was
/// deleted is simply never displayed.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewRow {
    pub id: Uuid,
    pub location_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    /// "verified" or "fake"; the CHECK constraint keeps out anything else.
    pub kind: String,
    pub comment: String,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl ReviewRow {
    pub fn to_info(&self) -> ReviewInfo {
        ReviewInfo {
            id: self.id.to_string(),
            location_id: self.location_id.to_string(),
            user_id: self.user_id.to_string(),
            user_name: self.user_name.clone(),
            kind: ReviewKind::from_str(&self.kind).unwrap_or(ReviewKind::Verified),
            comment: self.comment.clone(),
            created_at: self.created_at,
        }
    }
}
