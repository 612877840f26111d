//! Coordinate extraction from map listing URLs.
//!
//! Place links carry the coordinates twice: the viewport centre in an
//! `@<lat>,<lng>,<zoom>z` path segment and the place itself in a
//! `!3d<lat>!4d<lng>` data segment. The data segment is preferred.

use poi_tools::LatLng;
use regex::Regex;
use std::sync::OnceLock;

/// Base used to resolve relative listing hrefs.
pub const MAPS_ORIGIN: &str = "https://www.google.com";

fn data_segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"!3d(-?\d+(?:\.\d+)?)!4d(-?\d+(?:\.\d+)?)").expect("data segment regex is valid")
    })
}

fn viewport_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"@(-?\d+(?:\.\d+)?),(-?\d+(?:\.\d+)?)").expect("viewport regex is valid")
    })
}

/// Resolve a potentially relative listing href against the maps origin.
pub fn resolve_listing_url(href: &str) -> Option<String> {
    let base = url::Url::parse(MAPS_ORIGIN).ok()?;
    base.join(href).ok().map(|u| u.to_string())
}

/// Read the place coordinates from a listing or page URL.
pub fn coordinates_from_url(raw: &str) -> Option<LatLng> {
    let parsed = url::Url::parse(raw)
        .ok()
        .or_else(|| url::Url::parse(MAPS_ORIGIN).ok()?.join(raw).ok())?;
    let path = parsed.path();

    let caps = data_segment_re()
        .captures(path)
        .or_else(|| viewport_re().captures(path))?;
    let lat: f64 = caps.get(1)?.as_str().parse().ok()?;
    let lng: f64 = caps.get(2)?.as_str().parse().ok()?;
    LatLng::new(lat, lng).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACE: &str = "https://www.google.com/maps/place/Confeitaria+Colombo/@-22.9056,-43.1790,17z/data=!3m1!4b1!4m6!3m5!1s0x997f5e1d!8m2!3d-22.9055543!4d-43.1788722!16s%2Fg%2F1tdqgfx6";

    #[test]
    fn test_prefers_data_segment() {
        let at = coordinates_from_url(PLACE).unwrap();
        assert_eq!(at.lat, -22.9055543);
        assert_eq!(at.lng, -43.1788722);
    }

    #[test]
    fn test_falls_back_to_viewport() {
        let at = coordinates_from_url("https://www.google.com/maps/@32.9817464,70.1930781,3.67z?").unwrap();
        assert_eq!(at.lat, 32.9817464);
        assert_eq!(at.lng, 70.1930781);
    }

    #[test]
    fn test_relative_href() {
        let at = coordinates_from_url("/maps/place/X/@10.5,-20.25,15z").unwrap();
        assert_eq!((at.lat, at.lng), (10.5, -20.25));
        assert_eq!(
            resolve_listing_url("/maps/place/X").unwrap(),
            "https://www.google.com/maps/place/X"
        );
    }

    #[test]
    fn test_no_coordinates() {
        assert!(coordinates_from_url("https://www.google.com/maps/search/bakery").is_none());
        assert!(coordinates_from_url("https://www.google.com/maps/@95.0,10.0,3z").is_none());
    }

    #[test]
    fn test_query_string_ignored() {
        assert!(coordinates_from_url("https://www.google.com/maps/search/x?ll=@1.5,2.5").is_none());
    }
}
