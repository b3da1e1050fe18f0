//! # Community leaderboard aggregation
//!
//! Ranks contributors by number of reported locations over the full
//! current set (all time, not paginated). Grouping is by the report's
//! display name, not the stable user id: two accounts sharing a display
//! string merge into one entry, and the distinct-name count is only an
//! approximation of "total users". Both are accepted simplifications.

use serde::{Deserialize, Serialize};

use crate::models::LocationInfo;

/// How many contributors the board shows.
pub const TOP_N: usize = 5;

/// One ranked contributor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub count: usize,
}

/// Aggregated community numbers for the impact page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityStats {
    /// Top contributors, descending by count. Ties keep input order.
    pub top_contributors: Vec<Contributor>,
    /// Raw location document count.
    pub total_locations: usize,
    /// Distinct display names: a proxy, not an authoritative user count.
    pub total_users: usize,
}

/// Group locations by reporter display name, count, rank, take the top 5.
///
/// Missing or blank names are attributed to "Anonymous". The sort is
/// stable, so ties break by first appearance in the input.
pub fn aggregate(locations: &[LocationInfo]) -> CommunityStats {
    let mut order: Vec<String> = Vec::new();
    let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for loc in locations {
        let name = if loc.user_name.trim().is_empty() {
            "Anonymous".to_string()
        } else {
            loc.user_name.clone()
        };
        let entry = counts.entry(name.clone()).or_insert(0);
        if *entry == 0 {
            order.push(name);
        }
        *entry += 1;
    }

    let total_users = order.len();

    let mut ranked: Vec<Contributor> = order
        .into_iter()
        .map(|name| {
            let count = counts[&name];
            Contributor { name, count }
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(TOP_N);

    CommunityStats {
        top_contributors: ranked,
        total_locations: locations.len(),
        total_users,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc_by(name: &str) -> LocationInfo {
        LocationInfo {
            id: format!("loc-{name}-{}", rand_suffix()),
            name: "spot".into(),
            category: "tran".into(),
            custom_category: None,
            details: None,
            image_url: "https://img".into(),
            lat: 23.8,
            lng: 90.4,
            created_at: 0,
            user_id: name.to_lowercase(),
            user_name: name.into(),
            verified_count: 0,
            fake_count: 0,
        }
    }

    fn rand_suffix() -> usize {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static N: AtomicUsize = AtomicUsize::new(0);
        N.fetch_add(1, Ordering::Relaxed)
    }

    #[test]
    fn groups_and_ranks_by_display_name() {
        // A:3 then B:1 then A:2 more → A:5, B:1.
        let mut locations = Vec::new();
        for _ in 0..3 {
            locations.push(loc_by("A"));
        }
        locations.push(loc_by("B"));
        for _ in 0..2 {
            locations.push(loc_by("A"));
        }

        let stats = aggregate(&locations);
        assert_eq!(
            stats.top_contributors,
            vec![
                Contributor { name: "A".into(), count: 5 },
                Contributor { name: "B".into(), count: 1 },
            ]
        );
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.total_locations, 6);
    }

    #[test]
    fn keeps_only_top_five() {
        let mut locations = Vec::new();
        for (i, name) in ["A", "B", "C", "D", "E", "F"].iter().enumerate() {
            // A posts 6, B posts 5, ... F posts 1.
            for _ in 0..(6 - i) {
                locations.push(loc_by(name));
            }
        }
        let stats = aggregate(&locations);
        assert_eq!(stats.top_contributors.len(), TOP_N);
        assert_eq!(stats.top_contributors[0].name, "A");
        assert!(stats.top_contributors.iter().all(|c| c.name != "F"));
        assert_eq!(stats.total_users, 6);
    }

    #[test]
    fn blank_names_collapse_into_anonymous() {
        let mut anon = loc_by("X");
        anon.user_name = "  ".into();
        let stats = aggregate(&[anon, loc_by("B")]);
        assert!(stats.top_contributors.iter().any(|c| c.name == "Anonymous"));
        assert_eq!(stats.total_users, 2);
    }

    #[test]
    fn ties_keep_input_order() {
        let stats = aggregate(&[loc_by("B"), loc_by("A")]);
        assert_eq!(stats.top_contributors[0].name, "B");
        assert_eq!(stats.top_contributors[1].name, "A");
    }

    #[test]
    fn empty_input_is_all_zeroes() {
        let stats = aggregate(&[]);
        assert!(stats.top_contributors.is_empty());
        assert_eq!(stats.total_locations, 0);
        assert_eq!(stats.total_users, 0);
    }
}
