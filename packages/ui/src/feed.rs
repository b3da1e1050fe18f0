//! Live location feed hook.
//!
//! Owns the polling subscription for a view: an initial fetch on mount,
//! then a refetch loop on the configured interval for as long as the
//! owning component is alive. The ordered/fallback/error transitions live
//! in [`store::feed`]; this hook only drives them.

use dioxus::prelude::*;

use store::feed::{FeedSnapshot, FetchOutcome};

/// Subscribe to live location snapshots.
///
/// `poll_interval_secs = 0` fetches once and stops. Dropping the owning
/// scope tears the subscription down; an in-flight fetch completes and its
/// result is discarded with the signal.
pub fn use_location_feed(poll_interval_secs: u32) -> Signal<FeedSnapshot> {
    let mut feed = use_signal(FeedSnapshot::default);

    use_effect(move || {
        spawn(async move {
            loop {
                poll_once(&mut feed).await;

                if poll_interval_secs == 0 {
                    break;
                }
                let delay = std::time::Duration::from_secs(poll_interval_secs as u64);
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(delay).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(delay).await;
            }
        });
    });

    feed
}

/// Run one poll cycle: ordered while the machine still wants it, otherwise
/// the unordered fallback. A fallback refetch triggered by an empty or
/// failed ordered result happens within the same cycle.
async fn poll_once(feed: &mut Signal<FeedSnapshot>) {
    let mut snapshot = feed();

    if snapshot.wants_ordered() {
        let outcome = fetch(true).await;
        if let FetchOutcome::Err(ref e) = outcome {
            tracing::warn!("ordered feed query failed, falling back: {e}");
        }
        if snapshot.apply_ordered(outcome) {
            snapshot.apply_fallback(fetch(false).await);
        }
    } else {
        snapshot.apply_fallback(fetch(false).await);
    }

    feed.set(snapshot);
}

async fn fetch(ordered: bool) -> FetchOutcome {
    match api::list_locations(ordered).await {
        Ok(locations) => FetchOutcome::Ok(locations),
        Err(e) => FetchOutcome::Err(e.to_string()),
    }
}
