// src/handlers/directions.rs
// DOCUMENTATION: HTTP handler for directions lookups
// PURPOSE: Point-to-point route summary with turn-by-turn steps

use crate::errors::LookupError;
use crate::models::{Coordinates, TravelModeKind};
use crate::services::PlacesLookupClient;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use validator::Validate;

/// Query parameters for GET /directions
#[derive(Debug, Deserialize, Validate)]
pub struct DirectionsQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub origin_lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub origin_lng: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub destination_lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub destination_lng: f64,

    /// DRIVING, WALKING or TRANSIT (default DRIVING)
    pub travel_mode: Option<TravelModeKind>,
}

/// GET /directions
pub async fn get_directions(
    lookup: web::Data<PlacesLookupClient>,
    query: web::Query<DirectionsQuery>,
) -> Result<impl Responder, LookupError> {
    if let Err(e) = query.validate() {
        return Err(LookupError::ValidationError(e.to_string()));
    }

    let origin = Coordinates::new(query.origin_lat, query.origin_lng)?;
    let destination = Coordinates::new(query.destination_lat, query.destination_lng)?;

    let directions = lookup
        .get_directions(&origin, &destination, query.travel_mode.unwrap_or_default())
        .await?;

    Ok(HttpResponse::Ok().json(directions))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/directions", web::get().to(get_directions));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::maps_sdk::{
        DirectionsResponse, MapsSdk, MapsService, NearbySearchRequest, NearbySearchResponse,
        ProviderLeg, ProviderPolyline, ProviderRoute, ProviderStep, ProviderText, RouteRequest,
    };
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    /// Returns a canned directions response and records the requested mode
    struct CannedRoute {
        response: DirectionsResponse,
        last_mode: Mutex<Option<TravelModeKind>>,
    }

    #[async_trait]
    impl MapsService for CannedRoute {
        async fn nearby_search(
            &self,
            _request: &NearbySearchRequest,
        ) -> Result<NearbySearchResponse, LookupError> {
            Ok(NearbySearchResponse::default())
        }

        async fn route(&self, request: &RouteRequest) -> Result<DirectionsResponse, LookupError> {
            *self.last_mode.lock().unwrap() = Some(request.travel_mode);
            Ok(self.response.clone())
        }
    }

    fn text(value: &str) -> Option<ProviderText> {
        Some(ProviderText {
            text: value.to_string(),
            value: None,
        })
    }

    fn one_step_route() -> DirectionsResponse {
        DirectionsResponse {
            status: "OK".to_string(),
            routes: vec![ProviderRoute {
                legs: vec![ProviderLeg {
                    distance: text("3.1 km"),
                    duration: text("9 mins"),
                    steps: vec![ProviderStep {
                        html_instructions: "Turn <b>left</b> onto Main St".to_string(),
                        distance: text("3.1 km"),
                        duration: text("9 mins"),
                    }],
                }],
                overview_polyline: Some(ProviderPolyline {
                    points: "abc".to_string(),
                }),
            }],
            error_message: None,
        }
    }

    fn app_data(service: Arc<CannedRoute>) -> web::Data<PlacesLookupClient> {
        web::Data::new(PlacesLookupClient::new(
            Arc::new(MapsSdk::loaded(service)),
            &Config::for_tests("k", "https://maps.example.com/api"),
        ))
    }

    #[actix_rt::test]
    async fn test_directions_ok() {
        let service = Arc::new(CannedRoute {
            response: one_step_route(),
            last_mode: Mutex::new(None),
        });
        let app = test::init_service(
            App::new()
                .app_data(app_data(service.clone()))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/directions?origin_lat=23.34&origin_lng=85.30&destination_lat=23.40&destination_lng=85.35&travel_mode=WALKING")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["distance"], "3.1 km");
        assert_eq!(body["polylinePoints"], "abc");
        assert_eq!(body["steps"][0]["instruction"], "Turn left onto Main St");
        assert_eq!(*service.last_mode.lock().unwrap(), Some(TravelModeKind::Walking));
    }

    #[actix_rt::test]
    async fn test_directions_default_mode_is_driving() {
        let service = Arc::new(CannedRoute {
            response: one_step_route(),
            last_mode: Mutex::new(None),
        });
        let app = test::init_service(
            App::new()
                .app_data(app_data(service.clone()))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/directions?origin_lat=23.34&origin_lng=85.30&destination_lat=23.40&destination_lng=85.35")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(*service.last_mode.lock().unwrap(), Some(TravelModeKind::Driving));
    }

    #[actix_rt::test]
    async fn test_zero_results_maps_to_502() {
        let service = Arc::new(CannedRoute {
            response: DirectionsResponse {
                status: "ZERO_RESULTS".to_string(),
                routes: vec![],
                error_message: None,
            },
            last_mode: Mutex::new(None),
        });
        let app = test::init_service(App::new().app_data(app_data(service)).configure(config)).await;

        let req = test::TestRequest::get()
            .uri("/directions?origin_lat=23.34&origin_lng=85.30&destination_lat=-33.0&destination_lng=151.0")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "DIRECTIONS_UNAVAILABLE");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("ZERO_RESULTS"));
    }

    #[actix_rt::test]
    async fn test_unknown_travel_mode_rejected() {
        let service = Arc::new(CannedRoute {
            response: one_step_route(),
            last_mode: Mutex::new(None),
        });
        let app = test::init_service(App::new().app_data(app_data(service)).configure(config)).await;

        let req = test::TestRequest::get()
            .uri("/directions?origin_lat=1&origin_lng=1&destination_lat=2&destination_lng=2&travel_mode=FLYING")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
