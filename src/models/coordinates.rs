// src/models/coordinates.rs
// DOCUMENTATION: Geographic coordinate value object
// PURPOSE: Range-checked latitude/longitude pair shared by every lookup

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::LookupError;

/// Unchecked latitude/longitude pair as it arrives from callers
/// DOCUMENTATION: Validated into `Coordinates` before use
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct LatLng {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

/// Geographic point in degrees
/// DOCUMENTATION: lat ∈ [-90, 90], lng ∈ [-180, 180]. Fields are private so a
/// value can only exist once it passed the range check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LatLng")]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Build a coordinate pair, rejecting out-of-range or non-finite values
    pub fn new(lat: f64, lng: f64) -> Result<Self, LookupError> {
        Self::try_from(LatLng { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// "lat,lng" as expected by the provider's location parameters
    pub fn to_query_param(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl TryFrom<LatLng> for Coordinates {
    type Error = LookupError;

    fn try_from(raw: LatLng) -> Result<Self, Self::Error> {
        // NaN slips through range comparisons
        if !raw.lat.is_finite() || !raw.lng.is_finite() {
            return Err(LookupError::ValidationError(
                "coordinates must be finite numbers".to_string(),
            ));
        }

        raw.validate()
            .map_err(|e| LookupError::ValidationError(e.to_string()))?;

        Ok(Coordinates {
            lat: raw.lat,
            lng: raw.lng,
        })
    }
}

impl From<Coordinates> for geo_types::Point<f64> {
    fn from(coords: Coordinates) -> Self {
        geo_types::Point::new(coords.lng, coords.lat)
    }
}
