//! Minimal GeoJSON feature model and the per-feature transforms.
//!
//! Only the members the tools read are modelled; everything else in the
//! document is ignored on input.

use crate::coords::{self, Coordinates, Position};
use crate::error::{PoiError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl Feature {
    /// The `name` property, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|p| p.get("name"))
            .and_then(|v| v.as_str())
    }
}

/// Pair order used when flattening feature coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairOrder {
    /// Swap each pair, e.g. GeoJSON `[lng, lat]` becomes `[lat, lng]`.
    #[default]
    Inverted,
    /// Keep pairs in source order.
    AsIs,
}

/// A feature reduced to its name and a flat list of pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatFeature {
    pub name: Option<String>,
    pub coordinates: Vec<Position>,
}

/// A feature reduced to its name and its untouched coordinate tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedFeature {
    pub name: Option<String>,
    pub coordinates: Coordinates,
}

/// Yield `(index, feature, coordinates)` for every feature with a geometry.
fn with_coordinates(
    collection: &FeatureCollection,
) -> impl Iterator<Item = Result<(usize, &Feature, &Coordinates)>> {
    collection
        .features
        .iter()
        .enumerate()
        .filter_map(|(index, feature)| {
            let Some(geometry) = feature.geometry.as_ref() else {
                warn!(feature = index, "skipping feature with null geometry");
                return None;
            };
            Some(
                geometry
                    .coordinates
                    .as_ref()
                    .map(|c| (index, feature, c))
                    .ok_or(PoiError::MissingCoordinates { feature: index }),
            )
        })
}

/// Flatten every feature's coordinates into pairs, swapping each pair unless
/// `order` is [`PairOrder::AsIs`].
pub fn flatten_features(
    collection: &FeatureCollection,
    order: PairOrder,
) -> Result<Vec<FlatFeature>> {
    with_coordinates(collection)
        .map(|item| {
            let (index, feature, coordinates) = item?;
            let flat = coords::flatten(coordinates);
            let pairs = match order {
                PairOrder::Inverted => coords::invert(&flat)?,
                PairOrder::AsIs => coords::pairs(&flat)?,
            };
            debug!(
                feature = index,
                depth = coordinates.depth(),
                pairs = pairs.len(),
                "flattened feature"
            );
            Ok(FlatFeature {
                name: feature.name().map(String::from),
                coordinates: pairs,
            })
        })
        .collect()
}

/// Reduce every feature to its name and raw coordinates.
pub fn export_features(collection: &FeatureCollection) -> Result<Vec<ExportedFeature>> {
    with_coordinates(collection)
        .map(|item| {
            let (_, feature, coordinates) = item?;
            Ok(ExportedFeature {
                name: feature.name().map(String::from),
                coordinates: coordinates.clone(),
            })
        })
        .collect()
}
