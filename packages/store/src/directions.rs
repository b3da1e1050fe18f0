//! # Directions and share hand-off links
//!
//! Builders for the deep links that hand a spot over to an external
//! navigation app, plus the share-sheet message. iOS devices get an Apple
//! Maps URL; everything else gets a `geo:` URI with a timed fallback to
//! the Google Maps web URL in case no installed app claims the scheme.

/// Delay before opening the web fallback after firing a `geo:` URI.
pub const GEO_FALLBACK_DELAY_MS: u32 = 500;

/// Apple Maps directions URL (iOS).
pub fn apple_maps_url(lat: f64, lng: f64) -> String {
    format!("http://maps.apple.com/?daddr={lat},{lng}")
}

/// `geo:` URI with a labelled query pin (Android and friends).
pub fn geo_uri(lat: f64, lng: f64, label: &str) -> String {
    format!("geo:{lat},{lng}?q={lat},{lng}({})", urlencode(label))
}

/// Google Maps directions URL, the universal web fallback.
pub fn google_maps_url(lat: f64, lng: f64) -> String {
    format!("https://www.google.com/maps/dir/?api=1&destination={lat},{lng}")
}

/// Message body for the native share sheet (the URL travels separately).
pub fn share_text(name: &str, category_label: &str) -> String {
    format!("ফাওখাও: {name} - {category_label} স্পটটি দেখুন!")
}

/// Minimal percent-encoding for the label inside a `geo:` query. Keeps
/// unreserved ASCII, escapes everything else byte-wise.
fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apple_maps_url_carries_destination() {
        assert_eq!(
            apple_maps_url(23.8103, 90.4125),
            "http://maps.apple.com/?daddr=23.8103,90.4125"
        );
    }

    #[test]
    fn geo_uri_encodes_label() {
        let uri = geo_uri(23.5, 90.5, "Biriyani Mela");
        assert_eq!(uri, "geo:23.5,90.5?q=23.5,90.5(Biriyani%20Mela)");
    }

    #[test]
    fn geo_uri_encodes_non_ascii_label() {
        let uri = geo_uri(1.0, 2.0, "ভাত");
        assert!(uri.starts_with("geo:1,2?q=1,2(%E0%A6%AD"));
    }

    #[test]
    fn share_text_carries_name_and_resolved_label() {
        assert_eq!(
            share_text("টিএসসি মোড়", "মসজিদে বিরিয়ানি 🍛"),
            "ফাওখাও: টিএসসি মোড় - মসজিদে বিরিয়ানি 🍛 স্পটটি দেখুন!"
        );
    }

    #[test]
    fn google_maps_url_is_directions_api() {
        assert_eq!(
            google_maps_url(23.8103, 90.4125),
            "https://www.google.com/maps/dir/?api=1&destination=23.8103,90.4125"
        );
    }
}
