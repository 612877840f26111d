//! Point-of-interest records as written by the scraper.

use crate::error::{PoiError, Result};
use serde::{Deserialize, Serialize};

/// Description placeholder for listings without an introduction block.
pub const NO_DESCRIPTION: &str = "None Found";

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !valid {
            return Err(PoiError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }
}

/// One scraped map listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoiRecord {
    pub name: String,
    pub about: String,
    pub lat: f64,
    pub lng: f64,
}

impl PoiRecord {
    /// Build a record, substituting the placeholders for missing text.
    pub fn new(name: Option<String>, about: Option<String>, at: LatLng) -> Self {
        Self {
            name: name.unwrap_or_default(),
            about: about.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            lat: at.lat,
            lng: at.lng,
        }
    }

    pub fn position(&self) -> Result<LatLng> {
        LatLng::new(self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlng_range() {
        assert!(LatLng::new(-22.97, -43.18).is_ok());
        assert!(LatLng::new(90.0, 180.0).is_ok());
        assert!(LatLng::new(91.0, 0.0).is_err());
        assert!(LatLng::new(0.0, -180.5).is_err());
        assert!(LatLng::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_record_placeholders() {
        let at = LatLng::new(1.0, 2.0).unwrap();
        let rec = PoiRecord::new(None, None, at);
        assert_eq!(rec.name, "");
        assert_eq!(rec.about, NO_DESCRIPTION);
    }

    #[test]
    fn test_record_json_keys() {
        let at = LatLng::new(-22.9, -43.2).unwrap();
        let rec = PoiRecord::new(Some("Café Lamas".into()), Some("Since 1874".into()), at);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Café Lamas", "about": "Since 1874", "lat": -22.9, "lng": -43.2})
        );
        assert_eq!(rec.position().unwrap(), at);
    }
}
