//! Community impact page: totals and the top-contributor leaderboard.

use dioxus::prelude::*;

#[component]
pub fn Community() -> Element {
    let stats = use_resource(|| async { api::community_stats().await });

    rsx! {
        div {
            class: "page community",

            header {
                class: "page-header",
                h1 { "কমিউনিটি হিরো 🏆" }
                p { class: "tagline", "যারা মানুষকে খাওয়াচ্ছে!" }
            }

            match stats() {
                None => rsx! {
                    div { class: "page-loading", "হিসাব করছি... 🧮" }
                },
                Some(Err(e)) => rsx! {
                    div { class: "page-error", "ইশ! লোড করা গেলো না: {e}" }
                },
                Some(Ok(stats)) => {
                    // Rank, name, shared count, score. Ten points per share.
                    let rows: Vec<(usize, String, usize, usize)> = stats
                        .top_contributors
                        .iter()
                        .enumerate()
                        .map(|(i, c)| (i + 1, c.name.clone(), c.count, c.count * 10))
                        .collect();

                    rsx! {
                        div {
                            class: "stat-tiles",
                            div {
                                class: "stat-tile",
                                span { class: "stat-number", "{stats.total_locations}" }
                                span { class: "stat-label", "খাবার শেয়ার হয়েছে" }
                            }
                            div {
                                class: "stat-tile",
                                span { class: "stat-number", "{stats.total_users}" }
                                span { class: "stat-label", "কমিউনিটি মেম্বার" }
                            }
                        }

                        if rows.is_empty() {
                            div { class: "page-empty", "এখনো কোনো হিরো নেই, তুমিই প্রথম হও! 🦸" }
                        } else {
                            ol {
                                class: "leaderboard",
                                for (rank, name, count, score) in rows {
                                    li {
                                        key: "{name}",
                                        class: "leaderboard-row",
                                        span { class: "rank", "#{rank}" }
                                        span { class: "hero-name", "{name}" }
                                        span { class: "hero-count", "{count} টা খাবার" }
                                        span { class: "hero-score", "{score} পয়েন্ট" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
