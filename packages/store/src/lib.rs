pub mod categories;
pub mod config;
pub mod directions;
pub mod feed;
pub mod leaderboard;
pub mod models;

pub use categories::{Category, CategoryFilter, CATEGORIES};
pub use config::FaokhaoConfig;
pub use feed::{FeedPhase, FeedSnapshot, FetchOutcome};
pub use leaderboard::{CommunityStats, Contributor};
pub use models::{
    check_write_access, is_expired, LocationInfo, NewLocation, ReviewInfo, ReviewKind,
    WriteDenied, EXPIRY_WINDOW_MS,
};
