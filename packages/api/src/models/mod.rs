//! Data models for the application.
//!
//! Database rows live here (server only); their client-safe projections
//! either live alongside ([`UserInfo`]) or come from the `store` crate
//! ([`store::LocationInfo`], [`store::ReviewInfo`]).

mod user;

#[cfg(feature = "server")]
mod location;
#[cfg(feature = "server")]
mod review;

#[cfg(feature = "server")]
pub use location::LocationRow;
#[cfg(feature = "server")]
pub use review::ReviewRow;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
