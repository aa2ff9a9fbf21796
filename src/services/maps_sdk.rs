// src/services/maps_sdk.rs
// DOCUMENTATION: Maps provider seam
// PURPOSE: Define the provider calls the lookup client depends on, the raw
// response shapes they return, and the slot that says whether a provider is loaded

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::LookupError;
use crate::models::{Coordinates, TravelModeKind};

/// Nearby search for a single provider place type
#[derive(Debug, Clone, PartialEq)]
pub struct NearbySearchRequest {
    pub location: Coordinates,
    /// Search radius in meters
    pub radius: f64,
    pub place_type: String,
}

/// Point-to-point route request
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub origin: Coordinates,
    pub destination: Coordinates,
    pub travel_mode: TravelModeKind,
}

/// Nearby Search response body
/// DOCUMENTATION: Status is kept as the provider's raw string ("OK",
/// "ZERO_RESULTS", "OVER_QUERY_LIMIT", ...); interpretation is up to the caller
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<ProviderPlace>,
    pub error_message: Option<String>,
}

/// Raw place record from the provider
/// DOCUMENTATION: Everything is optional because the provider omits fields freely;
/// records without `place_id` are unusable downstream
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderPlace {
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub geometry: Option<ProviderGeometry>,
    pub rating: Option<f64>,
    pub price_level: Option<i32>,
    pub opening_hours: Option<ProviderOpeningHours>,
    pub vicinity: Option<String>,
    pub photos: Option<Vec<ProviderPhoto>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderGeometry {
    pub location: ProviderLocation,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ProviderLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderOpeningHours {
    pub open_now: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderPhoto {
    pub photo_reference: String,
}

/// Directions response body
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub routes: Vec<ProviderRoute>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderRoute {
    #[serde(default)]
    pub legs: Vec<ProviderLeg>,
    pub overview_polyline: Option<ProviderPolyline>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderLeg {
    pub distance: Option<ProviderText>,
    pub duration: Option<ProviderText>,
    #[serde(default)]
    pub steps: Vec<ProviderStep>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderStep {
    #[serde(default)]
    pub html_instructions: String,
    pub distance: Option<ProviderText>,
    pub duration: Option<ProviderText>,
}

/// Display text plus raw value (meters or seconds)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderText {
    #[serde(default)]
    pub text: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderPolyline {
    #[serde(default)]
    pub points: String,
}

/// Calls into the maps provider
/// DOCUMENTATION: One call resolves exactly one future. Transport failures are
/// `Err`; provider-level failures come back as a non-OK `status`.
#[async_trait]
pub trait MapsService: Send + Sync {
    async fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> Result<NearbySearchResponse, LookupError>;

    async fn route(&self, request: &RouteRequest) -> Result<DirectionsResponse, LookupError>;
}

/// Slot holding the loaded maps provider, if any
/// DOCUMENTATION: Injected into the lookup client. An empty slot is the
/// "SDK not loaded" state; it can be loaded or unloaded at runtime.
#[derive(Default)]
pub struct MapsSdk {
    service: RwLock<Option<Arc<dyn MapsService>>>,
}

impl MapsSdk {
    pub fn loaded(service: Arc<dyn MapsService>) -> Self {
        Self {
            service: RwLock::new(Some(service)),
        }
    }

    pub fn unloaded() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub async fn load(&self, service: Arc<dyn MapsService>) {
        *self.service.write().await = Some(service);
        log::info!("Maps SDK loaded");
    }

    #[allow(dead_code)]
    pub async fn unload(&self) {
        if self.service.write().await.take().is_some() {
            log::info!("Maps SDK unloaded");
        }
    }

    /// Current provider entry point, `None` while unloaded
    pub async fn entry_point(&self) -> Option<Arc<dyn MapsService>> {
        self.service.read().await.clone()
    }
}
