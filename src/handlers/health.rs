// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Simple endpoint to verify service status

use crate::services::PlacesLookupClient;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn health_check(lookup: web::Data<PlacesLookupClient>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "places-lookup",
        "version": env!("CARGO_PKG_VERSION"),
        "maps_sdk_loaded": lookup.sdk_available().await,
        "lookup_initialized": lookup.is_initialized().await
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::MapsSdk;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::sync::Arc;

    #[actix_rt::test]
    async fn test_health_reports_sdk_state() {
        let lookup = web::Data::new(PlacesLookupClient::new(
            Arc::new(MapsSdk::unloaded()),
            &Config::for_tests("", "http://localhost"),
        ));
        let app = test::init_service(App::new().app_data(lookup).configure(config)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["maps_sdk_loaded"], false);
        assert_eq!(body["lookup_initialized"], false);
    }
}
