//! Bulk insert of markers into the marker database.

use anyhow::{Context, Result};
use mongodb::bson::{doc, DateTime, Document};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::Client;
use poi_tools::Marker;
use tracing::info;

/// Where the markers go.
#[derive(Debug, Clone)]
pub struct Target {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

/// Convert a marker to the stored document shape.
///
/// Timestamps become BSON dates and the position an array of doubles.
pub fn to_document(marker: &Marker) -> Document {
    let mut d = doc! {
        "position": marker.position.to_vec(),
        "type": marker.marker_type.as_str(),
        "name": marker.name.as_str(),
        "description": marker.description.as_str(),
        "username": marker.username.as_str(),
        "isPrivate": marker.is_private,
        "createdAt": DateTime::from_millis(marker.created_at.timestamp_millis()),
        "updatedAt": DateTime::from_millis(marker.updated_at.timestamp_millis()),
    };
    if let Some(user_id) = &marker.user_id {
        d.insert("userId", user_id.as_str());
    }
    d
}

/// Connect with the Stable API and insert every document in one call.
/// Returns the number of inserted documents.
pub async fn insert_markers(target: &Target, markers: &[Marker]) -> Result<usize> {
    if markers.is_empty() {
        return Ok(0);
    }

    let mut options = ClientOptions::parse(&target.uri)
        .await
        .context("invalid MongoDB connection string")?;
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    let client = Client::with_options(options).context("failed to create MongoDB client")?;

    let collection = client
        .database(&target.database)
        .collection::<Document>(&target.collection);
    let docs: Vec<Document> = markers.iter().map(to_document).collect();

    info!(
        database = %target.database,
        collection = %target.collection,
        count = docs.len(),
        "inserting markers"
    );
    let result = collection
        .insert_many(docs)
        .await
        .with_context(|| format!("insert into {}.{} failed", target.database, target.collection))?;
    Ok(result.inserted_ids.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mongodb::bson::Bson;
    use poi_tools::{MarkerOptions, PoiRecord};

    fn marker(user_id: Option<&str>) -> Marker {
        let record = PoiRecord {
            name: "Academia Praia".into(),
            about: "Open air gym".into(),
            lat: -22.97,
            lng: -43.18,
        };
        let options = MarkerOptions {
            marker_type: "gym".into(),
            username: "importer".into(),
            user_id: user_id.map(String::from),
            is_private: false,
        };
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        Marker::from_record(&record, &options, now)
    }

    #[test]
    fn test_document_shape() {
        let d = to_document(&marker(Some("7656")));
        let position = d.get_array("position").unwrap();
        assert_eq!(
            position,
            &vec![Bson::Double(-43.18), Bson::Double(-22.97), Bson::Double(0.0)]
        );
        assert_eq!(d.get_str("type").unwrap(), "gym");
        assert_eq!(d.get_str("description").unwrap(), "Open air gym");
        assert_eq!(d.get_str("userId").unwrap(), "7656");
        assert!(!d.get_bool("isPrivate").unwrap());
        let created = d.get_datetime("createdAt").unwrap();
        assert_eq!(created.timestamp_millis(), 1_704_164_645_000);
        assert_eq!(d.get_datetime("updatedAt").unwrap(), created);
    }

    #[test]
    fn test_document_without_user_id() {
        let d = to_document(&marker(None));
        assert!(!d.contains_key("userId"));
    }

    #[tokio::test]
    async fn test_empty_insert_skips_connection() {
        let target = Target {
            uri: "not a uri".into(),
            database: "test".into(),
            collection: "markers".into(),
        };
        assert_eq!(insert_markers(&target, &[]).await.unwrap(), 0);
    }
}
