//! Core library for poi-tools.
//!
//! Holds the data model shared by the batch tools (scraped POI records,
//! database markers, GeoJSON features) and the pure coordinate transforms.
//! Nothing here touches the network or a browser.

pub mod coords;
pub mod error;
pub mod geojson;
pub mod io;
pub mod marker;
pub mod poi;

pub use coords::{Coordinates, Position};
pub use error::{PoiError, Result};
pub use geojson::{ExportedFeature, FeatureCollection, FlatFeature, PairOrder};
pub use marker::{Marker, MarkerOptions};
pub use poi::{LatLng, PoiRecord};
