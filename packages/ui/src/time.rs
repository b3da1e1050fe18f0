//! Clock helpers shared by views.

/// Current time as epoch milliseconds, on both native and WASM targets.
pub fn now_ms() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Coarse "posted ... ago" label for cards and reviews.
pub fn time_ago(now_ms: i64, then_ms: i64) -> String {
    let elapsed = now_ms.saturating_sub(then_ms);
    let minutes = elapsed / 60_000;
    if minutes < 1 {
        return "কিছুক্ষণ আগে".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} মিনিট আগে");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours} ঘণ্টা আগে");
    }
    let days = hours / 24;
    format!("{days} দিন আগে")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_elapsed_time() {
        assert_eq!(time_ago(30_000, 0), "কিছুক্ষণ আগে");
        assert_eq!(time_ago(5 * 60_000, 0), "5 মিনিট আগে");
        assert_eq!(time_ago(3 * 3_600_000, 0), "3 ঘণ্টা আগে");
        assert_eq!(time_ago(49 * 3_600_000, 0), "2 দিন আগে");
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        assert_eq!(time_ago(0, 10_000), "কিছুক্ষণ আগে");
    }
}
