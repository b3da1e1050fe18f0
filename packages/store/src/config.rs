//! # Application configuration (`faokhao.toml`)
//!
//! Optional deploy-time configuration for the web app. A missing or empty
//! file is equivalent to the defaults.
//!
//! ```toml
//! [map]
//! center_lat = 23.8103    # Dhaka
//! center_lng = 90.4125
//!
//! [feed]
//! poll_interval_secs = 15   # live-snapshot refresh cadence
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `faokhao.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FaokhaoConfig {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

/// Map defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,
}

/// Feed polling cadence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Seconds between snapshot refetches. 0 disables polling after the
    /// initial load.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u32,
}

fn default_center_lat() -> f64 {
    23.8103
}

fn default_center_lng() -> f64 {
    90.4125
}

fn default_poll_interval() -> u32 {
    15
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
        }
    }
}

impl FaokhaoConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "faokhao.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_defaults() {
        let cfg = FaokhaoConfig::from_toml("").unwrap();
        assert_eq!(cfg, FaokhaoConfig::default());
        assert_eq!(cfg.map.center_lat, 23.8103);
        assert_eq!(cfg.feed.poll_interval_secs, 15);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = FaokhaoConfig::from_toml("[feed]\npoll_interval_secs = 60\n").unwrap();
        assert_eq!(cfg.feed.poll_interval_secs, 60);
        assert_eq!(cfg.map.center_lng, 90.4125);
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = FaokhaoConfig::default();
        let s = cfg.to_toml().unwrap();
        assert_eq!(FaokhaoConfig::from_toml(&s).unwrap(), cfg);
    }
}
