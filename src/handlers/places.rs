// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place lookups
// PURPOSE: Parse requests, call the lookup client, return responses

use crate::errors::LookupError;
use crate::models::{to_feature_collection, Coordinates};
use crate::services::{PlacesLookupClient, DEFAULT_PHOTO_WIDTH, DEFAULT_RADIUS_M};
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

/// Output shape of the nearby endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    Geojson,
}

/// Query parameters for GET /places/nearby
#[derive(Debug, Deserialize, Validate)]
pub struct NearbyQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,

    /// Category key; unknown values search everything
    pub category: Option<String>,

    /// Radius in meters
    #[validate(range(min = 1.0, max = 50000.0))]
    pub radius: Option<f64>,

    pub format: Option<ResponseFormat>,
}

/// Query parameters for GET /places/photo-url
#[derive(Debug, Deserialize, Validate)]
pub struct PhotoUrlQuery {
    #[serde(default)]
    pub reference: String,

    #[validate(range(min = 1, max = 1600))]
    pub max_width: Option<u32>,
}

/// GET /places/categories
pub async fn list_categories(lookup: web::Data<PlacesLookupClient>) -> impl Responder {
    HttpResponse::Ok().json(lookup.place_categories())
}

/// GET /places/travel-modes
pub async fn list_travel_modes(lookup: web::Data<PlacesLookupClient>) -> impl Responder {
    HttpResponse::Ok().json(lookup.travel_modes())
}

/// GET /places/nearby
/// Nearby places ranked by distance, as JSON or a GeoJSON FeatureCollection
pub async fn nearby_places(
    lookup: web::Data<PlacesLookupClient>,
    query: web::Query<NearbyQuery>,
) -> Result<impl Responder, LookupError> {
    if let Err(e) = query.validate() {
        return Err(LookupError::ValidationError(e.to_string()));
    }

    let query = query.into_inner();
    let center = Coordinates::new(query.lat, query.lng)?;

    let places = lookup
        .fetch_nearby_places(
            &center,
            query.category.as_deref().unwrap_or("all"),
            query.radius.unwrap_or(DEFAULT_RADIUS_M),
        )
        .await?;

    match query.format.unwrap_or_default() {
        ResponseFormat::Json => Ok(HttpResponse::Ok().json(places)),
        ResponseFormat::Geojson => Ok(HttpResponse::Ok()
            .content_type("application/geo+json")
            .json(to_feature_collection(&places))),
    }
}

/// GET /places/photo-url
/// Never fails on a missing reference or credential; the URL is just empty
pub async fn photo_url(
    lookup: web::Data<PlacesLookupClient>,
    query: web::Query<PhotoUrlQuery>,
) -> Result<impl Responder, LookupError> {
    if let Err(e) = query.validate() {
        return Err(LookupError::ValidationError(e.to_string()));
    }

    let url = lookup.photo_url(
        &query.reference,
        query.max_width.unwrap_or(DEFAULT_PHOTO_WIDTH),
    );
    Ok(HttpResponse::Ok().json(json!({ "url": url })))
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/places")
            .route("/categories", web::get().to(list_categories))
            .route("/travel-modes", web::get().to(list_travel_modes))
            .route("/nearby", web::get().to(nearby_places))
            .route("/photo-url", web::get().to(photo_url)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::maps_sdk::{
        DirectionsResponse, MapsSdk, MapsService, NearbySearchRequest, NearbySearchResponse,
        ProviderGeometry, ProviderLocation, ProviderPlace, RouteRequest,
    };
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Arc;

    /// Answers every search with one police station next to the center
    struct OnePoliceStation;

    #[async_trait]
    impl MapsService for OnePoliceStation {
        async fn nearby_search(
            &self,
            request: &NearbySearchRequest,
        ) -> Result<NearbySearchResponse, LookupError> {
            if request.place_type != "police" {
                return Ok(NearbySearchResponse {
                    status: "ZERO_RESULTS".to_string(),
                    ..Default::default()
                });
            }
            Ok(NearbySearchResponse {
                status: "OK".to_string(),
                results: vec![ProviderPlace {
                    place_id: Some("pol-1".to_string()),
                    name: "Kotwali Police Station".to_string(),
                    types: vec!["police".to_string()],
                    geometry: Some(ProviderGeometry {
                        location: ProviderLocation {
                            lat: request.location.lat() + 0.001,
                            lng: request.location.lng(),
                        },
                    }),
                    ..Default::default()
                }],
                error_message: None,
            })
        }

        async fn route(&self, _request: &RouteRequest) -> Result<DirectionsResponse, LookupError> {
            Ok(DirectionsResponse::default())
        }
    }

    fn lookup(sdk: MapsSdk, api_key: &str) -> web::Data<PlacesLookupClient> {
        web::Data::new(PlacesLookupClient::new(
            Arc::new(sdk),
            &Config::for_tests(api_key, "https://maps.example.com/api"),
        ))
    }

    #[actix_rt::test]
    async fn test_categories_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(lookup(MapsSdk::unloaded(), ""))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get().uri("/places/categories").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["key"], "all");
        assert_eq!(body.as_array().unwrap().len(), 6);
    }

    #[actix_rt::test]
    async fn test_travel_modes_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(lookup(MapsSdk::unloaded(), ""))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get().uri("/places/travel-modes").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let modes = body.as_array().unwrap();
        assert_eq!(modes.len(), 3);
        assert_eq!(modes[0]["mode"], "DRIVING");
        assert!(modes.iter().all(|m| m["available"] == true));
    }

    #[actix_rt::test]
    async fn test_nearby_json() {
        let app = test::init_service(
            App::new()
                .app_data(lookup(MapsSdk::loaded(Arc::new(OnePoliceStation)), "k"))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/places/nearby?lat=23.3441&lng=85.3096&category=police&radius=2000")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let places = body.as_array().unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0]["id"], "pol-1");
        assert_eq!(places[0]["type"], "police");
        assert!(places[0]["distance"].as_f64().unwrap() > 100.0);
    }

    #[actix_rt::test]
    async fn test_nearby_geojson() {
        let app = test::init_service(
            App::new()
                .app_data(lookup(MapsSdk::loaded(Arc::new(OnePoliceStation)), "k"))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/places/nearby?lat=23.3441&lng=85.3096&format=geojson")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/geo+json"
        );

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["type"], "FeatureCollection");
        assert_eq!(body["features"][0]["geometry"]["type"], "Point");
    }

    #[actix_rt::test]
    async fn test_nearby_without_sdk_is_503() {
        let app = test::init_service(
            App::new()
                .app_data(lookup(MapsSdk::unloaded(), ""))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/places/nearby?lat=23.3441&lng=85.3096")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SDK_UNAVAILABLE");
        assert_eq!(body["error"]["retryable"], true);
    }

    #[actix_rt::test]
    async fn test_nearby_rejects_out_of_range() {
        let app = test::init_service(
            App::new()
                .app_data(lookup(MapsSdk::loaded(Arc::new(OnePoliceStation)), "k"))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/places/nearby?lat=123.0&lng=85.3096")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/places/nearby?lat=23.0&lng=85.0&radius=90000")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_photo_url_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(lookup(MapsSdk::unloaded(), "k"))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/places/photo-url?reference=abc&max_width=800")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["url"],
            "https://maps.example.com/api/place/photo?maxwidth=800&photoreference=abc&key=k"
        );

        let req = test::TestRequest::get().uri("/places/photo-url").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["url"], "");
    }
}
