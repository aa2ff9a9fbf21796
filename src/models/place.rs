// src/models/place.rs
// DOCUMENTATION: Nearby place result model
// PURPOSE: Normalized, request-scoped place returned by nearby searches

use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use serde::Serialize;
use serde_json::Value;

use super::{Coordinates, PlaceCategoryKey};

/// A place found around a search center
/// DOCUMENTATION: Built from a raw provider record; `type_` is never `All`.
/// `distance` is the great-circle distance to the search center in meters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyPlace {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: PlaceCategoryKey,
    pub coordinates: Coordinates,
    pub rating: Option<f64>,
    pub price_level: Option<i32>,
    pub open_now: Option<bool>,
    pub vicinity: Option<String>,
    pub photo_reference: Option<String>,
    pub distance: Option<f64>,
}

impl NearbyPlace {
    /// Convert to a GeoJSON Point feature for map layers
    /// DOCUMENTATION: Properties mirror the JSON fields minus coordinates
    pub fn to_feature(&self) -> Feature {
        let point: geo_types::Point<f64> = self.coordinates.into();

        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), Value::from(self.name.clone()));
        properties.insert("type".to_string(), Value::from(self.type_.as_str()));
        if let Some(rating) = self.rating {
            properties.insert("rating".to_string(), Value::from(rating));
        }
        if let Some(level) = self.price_level {
            properties.insert("priceLevel".to_string(), Value::from(level));
        }
        if let Some(open) = self.open_now {
            properties.insert("openNow".to_string(), Value::from(open));
        }
        if let Some(vicinity) = &self.vicinity {
            properties.insert("vicinity".to_string(), Value::from(vicinity.clone()));
        }
        if let Some(reference) = &self.photo_reference {
            properties.insert("photoReference".to_string(), Value::from(reference.clone()));
        }
        if let Some(distance) = self.distance {
            properties.insert("distance".to_string(), Value::from(distance));
        }

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::from(&point))),
            id: Some(geojson::feature::Id::String(self.id.clone())),
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Wrap places into a FeatureCollection, keeping their order
pub fn to_feature_collection(places: &[NearbyPlace]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: places.iter().map(NearbyPlace::to_feature).collect(),
        foreign_members: None,
    }
}
