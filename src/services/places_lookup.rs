// src/services/places_lookup.rs
// DOCUMENTATION: Nearby places and directions lookup
// PURPOSE: Single access point for category/travel-mode metadata, nearby search,
// directions and photo URLs, normalizing provider responses into our models

use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use regex::Regex;
use reqwest::Url;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::errors::LookupError;
use crate::models::{
    place_categories, travel_modes, Coordinates, DirectionsInfo, DirectionsStep, NearbyPlace,
    PlaceCategory, PlaceCategoryKey, TravelMode, TravelModeKind,
};
use crate::services::best_effort::collect_best_effort;
use crate::services::distance::haversine_distance;
use crate::services::maps_sdk::{
    DirectionsResponse, MapsSdk, MapsService, NearbySearchRequest, ProviderPlace, RouteRequest,
};

/// Default nearby search radius in meters
pub const DEFAULT_RADIUS_M: f64 = 5000.0;
/// Largest radius the provider accepts
pub const MAX_RADIUS_M: f64 = 50_000.0;
/// Raw records kept from each per-type search
pub const MAX_RESULTS_PER_TYPE: usize = 10;
/// Places returned by one nearby lookup
pub const MAX_NEARBY_RESULTS: usize = 20;
pub const DEFAULT_PHOTO_WIDTH: u32 = 400;

/// Lookup client shared by every caller of the service
/// DOCUMENTATION: Built once at startup and handed to handlers as app data.
/// The provider handle is taken from the injected `MapsSdk` on first use and
/// re-checked on every call that needs it.
pub struct PlacesLookupClient {
    sdk: Arc<MapsSdk>,
    /// Lazily initialized provider handle
    handle: RwLock<Option<Arc<dyn MapsService>>>,
    /// Credential used only for photo URLs
    api_key: Option<String>,
    maps_base_url: String,
    request_timeout: Option<Duration>,
}

impl PlacesLookupClient {
    pub fn new(sdk: Arc<MapsSdk>, config: &Config) -> Self {
        Self {
            sdk,
            handle: RwLock::new(None),
            api_key: config.api_key().map(str::to_string),
            maps_base_url: config.maps_api_base_url.trim_end_matches('/').to_string(),
            request_timeout: config.request_timeout(),
        }
    }

    /// Acquire the provider handle
    /// DOCUMENTATION: Idempotent. Fails with SdkUnavailable (and forgets any
    /// previous handle) when the SDK slot is empty at call time.
    pub async fn initialize(&self) -> Result<Arc<dyn MapsService>, LookupError> {
        let Some(service) = self.sdk.entry_point().await else {
            if self.handle.write().await.take().is_some() {
                log::warn!("Maps SDK was unloaded, dropping provider handle");
            }
            return Err(LookupError::SdkUnavailable);
        };

        {
            let handle = self.handle.read().await;
            if let Some(existing) = handle.as_ref() {
                if Arc::ptr_eq(existing, &service) {
                    return Ok(service);
                }
            }
        }

        *self.handle.write().await = Some(Arc::clone(&service));
        log::info!("Places lookup client initialized with maps provider");
        Ok(service)
    }

    pub async fn is_initialized(&self) -> bool {
        self.handle.read().await.is_some()
    }

    /// Whether the SDK slot currently holds a provider
    pub async fn sdk_available(&self) -> bool {
        self.sdk.entry_point().await.is_some()
    }

    /// All place categories, "all" first
    pub fn place_categories(&self) -> Vec<PlaceCategory> {
        place_categories()
    }

    pub fn travel_modes(&self) -> Vec<TravelMode> {
        travel_modes()
    }

    /// Find places around `center`
    /// DOCUMENTATION: Unknown categories search everything. One provider search
    /// per provider type is issued up front and all are awaited together; any
    /// sub-search that fails, times out or reports a non-OK status contributes
    /// nothing. Results are ranked by distance and capped at 20.
    ///
    /// # Arguments
    /// * `center` - Search center
    /// * `category` - PlaceCategory key, "all" by convention
    /// * `radius` - Search radius in meters; non-positive values fall back to
    ///   the default, values above the provider maximum are capped
    pub async fn fetch_nearby_places(
        &self,
        center: &Coordinates,
        category: &str,
        radius: f64,
    ) -> Result<Vec<NearbyPlace>, LookupError> {
        let service = self.initialize().await?;

        let key = PlaceCategoryKey::parse_or_all(category);
        let radius = sanitize_radius(radius);
        let provider_types = key.provider_types();

        log::debug!(
            "Nearby lookup: center={}, category={}, radius={}, provider_types={:?}",
            center.to_query_param(),
            key.as_str(),
            radius,
            provider_types
        );

        let searches = provider_types.iter().map(|place_type| {
            let service = Arc::clone(&service);
            let request = NearbySearchRequest {
                location: *center,
                radius,
                place_type: place_type.to_string(),
            };
            async move { self.search_provider_type(service.as_ref(), &request).await }
        });

        let records = collect_best_effort("nearby search", searches).await;
        let places = rank_nearby_places(center, records);

        log::info!(
            "Nearby lookup for {} returned {} places",
            key.as_str(),
            places.len()
        );

        Ok(places)
    }

    /// Route between two points
    /// DOCUMENTATION: Single provider request; any failure propagates
    pub async fn get_directions(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        travel_mode: TravelModeKind,
    ) -> Result<DirectionsInfo, LookupError> {
        let service = self.initialize().await?;

        let request = RouteRequest {
            origin: *origin,
            destination: *destination,
            travel_mode,
        };

        let response = self.bounded(service.route(&request)).await?;
        directions_from_response(response)
    }

    /// Image URL for a provider photo reference
    /// DOCUMENTATION: Empty string when the reference is empty or no API key is
    /// configured; callers use the value directly as an image source
    pub fn photo_url(&self, photo_reference: &str, max_width: u32) -> String {
        let reference = photo_reference.trim();
        if reference.is_empty() {
            return String::new();
        }

        let Some(key) = self.api_key.as_deref() else {
            return String::new();
        };

        let base = format!("{}/place/photo", self.maps_base_url);
        match Url::parse_with_params(
            &base,
            &[
                ("maxwidth", max_width.to_string().as_str()),
                ("photoreference", reference),
                ("key", key),
            ],
        ) {
            Ok(url) => url.to_string(),
            Err(e) => {
                log::warn!("Could not build photo URL from {}: {}", base, e);
                String::new()
            }
        }
    }

    /// One per-type search, limited to MAX_RESULTS_PER_TYPE records
    async fn search_provider_type(
        &self,
        service: &dyn MapsService,
        request: &NearbySearchRequest,
    ) -> Result<Vec<ProviderPlace>, LookupError> {
        let response = self.bounded(service.nearby_search(request)).await?;

        match response.status.as_str() {
            "OK" => Ok(response
                .results
                .into_iter()
                .take(MAX_RESULTS_PER_TYPE)
                .collect()),
            "ZERO_RESULTS" => Ok(Vec::new()),
            other => Err(LookupError::ExternalApiError(format!(
                "nearby search for {} returned status {}",
                request.place_type, other
            ))),
        }
    }

    /// Apply the configured timeout to a provider call
    async fn bounded<T, F>(&self, call: F) -> Result<T, LookupError>
    where
        F: Future<Output = Result<T, LookupError>>,
    {
        match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                log::warn!("Provider call exceeded {:?}", limit);
                LookupError::Timeout(limit.as_secs())
            })?,
            None => call.await,
        }
    }
}

fn sanitize_radius(radius: f64) -> f64 {
    if !radius.is_finite() || radius <= 0.0 {
        log::debug!("Invalid radius {}, using default", radius);
        DEFAULT_RADIUS_M
    } else {
        radius.min(MAX_RADIUS_M)
    }
}

/// Convert, de-duplicate, rank and cap raw provider records
/// DOCUMENTATION: Records without an id or a usable location are dropped.
/// The first record seen for an id wins. Output is sorted by ascending
/// distance from `center` and holds at most MAX_NEARBY_RESULTS places.
pub fn rank_nearby_places(center: &Coordinates, records: Vec<ProviderPlace>) -> Vec<NearbyPlace> {
    let mut seen = HashSet::new();

    let mut places: Vec<NearbyPlace> = records
        .into_iter()
        .filter_map(|record| to_nearby_place(center, record))
        .filter(|place| seen.insert(place.id.clone()))
        .collect();

    places.sort_by(|a, b| {
        let a = a.distance.unwrap_or(f64::INFINITY);
        let b = b.distance.unwrap_or(f64::INFINITY);
        a.total_cmp(&b)
    });
    places.truncate(MAX_NEARBY_RESULTS);
    places
}

fn to_nearby_place(center: &Coordinates, record: ProviderPlace) -> Option<NearbyPlace> {
    let id = match record.place_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => {
            log::debug!("Dropping provider record without id: {}", record.name);
            return None;
        }
    };

    let location = record.geometry.as_ref()?.location;
    let coordinates = match Coordinates::new(location.lat, location.lng) {
        Ok(coords) => coords,
        Err(e) => {
            log::debug!("Dropping provider record {} with bad location: {}", id, e);
            return None;
        }
    };

    Some(NearbyPlace {
        type_: PlaceCategoryKey::from_provider_types(&record.types),
        distance: Some(haversine_distance(center, &coordinates)),
        open_now: record.opening_hours.as_ref().and_then(|hours| hours.open_now),
        photo_reference: record
            .photos
            .as_ref()
            .and_then(|photos| photos.first())
            .map(|photo| photo.photo_reference.clone()),
        id,
        name: record.name,
        coordinates,
        rating: record.rating,
        price_level: record.price_level,
        vicinity: record.vicinity,
    })
}

/// Extract the first leg of the first route
/// DOCUMENTATION: Non-OK status, no routes or a route without legs all fail
/// with DirectionsUnavailable carrying the provider status
pub fn directions_from_response(response: DirectionsResponse) -> Result<DirectionsInfo, LookupError> {
    if response.status != "OK" {
        return Err(LookupError::DirectionsUnavailable {
            status: response.status,
        });
    }

    // an OK status with nothing in it is reported like the provider's own empty answer
    let empty = || LookupError::DirectionsUnavailable {
        status: "ZERO_RESULTS".to_string(),
    };

    let route = response.routes.into_iter().next().ok_or_else(empty)?;
    let polyline_points = route
        .overview_polyline
        .map(|polyline| polyline.points)
        .unwrap_or_default();
    let leg = route.legs.into_iter().next().ok_or_else(empty)?;

    let steps = leg
        .steps
        .into_iter()
        .map(|step| DirectionsStep {
            instruction: strip_html_tags(&step.html_instructions),
            distance: step.distance.map(|d| d.text).unwrap_or_default(),
            duration: step.duration.map(|d| d.text).unwrap_or_default(),
        })
        .collect();

    Ok(DirectionsInfo {
        distance: leg.distance.map(|d| d.text).unwrap_or_default(),
        duration: leg.duration.map(|d| d.text).unwrap_or_default(),
        steps,
        polyline_points,
    })
}

/// Remove every markup tag from an instruction
pub fn strip_html_tags(html: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let tag = TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
    tag.replace_all(html, "").trim().to_string()
}
