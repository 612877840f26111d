//! Map markers built from POI records for the marker database.

use crate::poi::PoiRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Operator-supplied attributes shared by every imported marker.
#[derive(Debug, Clone)]
pub struct MarkerOptions {
    pub marker_type: String,
    pub username: String,
    pub user_id: Option<String>,
    pub is_private: bool,
}

/// A marker as stored in the `markers` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// `[lng, lat, 0.0]`: map x, map y, height.
    pub position: [f64; 3],
    #[serde(rename = "type")]
    pub marker_type: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub username: String,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Marker {
    pub fn from_record(record: &PoiRecord, options: &MarkerOptions, now: DateTime<Utc>) -> Self {
        Self {
            position: [record.lng, record.lat, 0.0],
            marker_type: options.marker_type.clone(),
            name: record.name.clone(),
            description: record.about.clone(),
            user_id: options.user_id.clone(),
            username: options.username.clone(),
            is_private: options.is_private,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Map every record with the same options and timestamp.
pub fn markers_from_records(
    records: &[PoiRecord],
    options: &MarkerOptions,
    now: DateTime<Utc>,
) -> Vec<Marker> {
    records
        .iter()
        .map(|r| Marker::from_record(r, options, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn options() -> MarkerOptions {
        MarkerOptions {
            marker_type: "gym".into(),
            username: "importer".into(),
            user_id: None,
            is_private: false,
        }
    }

    #[test]
    fn test_position_is_lng_lat_height() {
        let rec = PoiRecord {
            name: "Academia".into(),
            about: "24h".into(),
            lat: -22.9,
            lng: -43.2,
        };
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let marker = Marker::from_record(&rec, &options(), now);
        assert_eq!(marker.position, [-43.2, -22.9, 0.0]);
        assert_eq!(marker.description, "24h");
        assert_eq!(marker.created_at, marker.updated_at);
    }

    #[test]
    fn test_serialized_field_names() {
        let rec = PoiRecord {
            name: "n".into(),
            about: "a".into(),
            lat: 1.0,
            lng: 2.0,
        };
        let mut opts = options();
        opts.user_id = Some("7656".into());
        let json = serde_json::to_value(Marker::from_record(&rec, &opts, Utc::now())).unwrap();
        assert_eq!(json["type"], "gym");
        assert_eq!(json["userId"], "7656");
        assert_eq!(json["isPrivate"], false);
        assert!(json.get("createdAt").is_some());

        let json = serde_json::to_value(Marker::from_record(&rec, &options(), Utc::now())).unwrap();
        assert!(json.get("userId").is_none());
    }

    #[test]
    fn test_markers_share_timestamp() {
        let recs = vec![
            PoiRecord { name: "a".into(), about: "".into(), lat: 0.0, lng: 0.0 },
            PoiRecord { name: "b".into(), about: "".into(), lat: 1.0, lng: 1.0 },
        ];
        let now = Utc::now();
        let markers = markers_from_records(&recs, &options(), now);
        assert_eq!(markers.len(), 2);
        assert!(markers.iter().all(|m| m.created_at == now));
    }
}
