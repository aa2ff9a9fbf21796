// src/services/google_maps_client.rs
// DOCUMENTATION: Google Maps web-service client
// PURPOSE: Production MapsService speaking the Places Nearby Search and
// Directions JSON APIs

use crate::config::Config;
use crate::errors::LookupError;
use crate::services::maps_sdk::{
    DirectionsResponse, MapsService, NearbySearchRequest, NearbySearchResponse, RouteRequest,
};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;

/// Google Maps API client
/// DOCUMENTATION: Handles authentication, throttling and HTTP calls to Google Maps
pub struct GoogleMapsClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Maps API key
    api_key: String,
    /// Base URL for Google Maps web services (without trailing slash)
    base_url: String,
    /// Outgoing request throttle shared by all calls
    limiter: DefaultDirectRateLimiter,
}

impl GoogleMapsClient {
    /// Create new Google Maps API client
    /// DOCUMENTATION: Builds the HTTP client with the configured timeout and
    /// rate limit. Fails when no API key is configured.
    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| LookupError::InvalidInput("Google Maps API key not configured".to_string()))?
            .to_string();

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LookupError::ExternalApiError(format!("HTTP client init failed: {}", e)))?;

        let per_second = NonZeroU32::new(config.provider_rate_limit_per_sec)
            .ok_or_else(|| LookupError::InvalidInput("rate limit must be non-zero".to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.maps_api_base_url.trim_end_matches('/').to_string(),
            limiter: RateLimiter::direct(Quota::per_second(per_second)),
        })
    }

    /// GET a provider JSON endpoint and decode the body
    /// DOCUMENTATION: Shared by both endpoints; waits for a rate-limiter permit first
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, LookupError> {
        self.limiter.until_ready().await;

        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                log::error!("Google Maps request to {} failed: {}", endpoint, e);
                LookupError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            log::error!("Google Maps API throttled request to {}", endpoint);
            return Err(LookupError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Google Maps API error {} on {}: {}", status, endpoint, body);
            return Err(LookupError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        response.json::<T>().await.map_err(|e| {
            log::error!("Failed to parse Google Maps response from {}: {}", endpoint, e);
            LookupError::ExternalApiError(format!("Parse error: {}", e))
        })
    }
}

#[async_trait]
impl MapsService for GoogleMapsClient {
    /// Perform nearby search for one place type
    /// DOCUMENTATION: Returns the provider's status untouched so the caller
    /// decides what a non-OK status means
    async fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> Result<NearbySearchResponse, LookupError> {
        log::debug!(
            "Google Places nearby search: location={}, radius={}, type={}",
            request.location.to_query_param(),
            request.radius,
            request.place_type
        );

        let params = [
            ("location", request.location.to_query_param()),
            ("radius", format!("{}", request.radius.round() as u64)),
            ("type", request.place_type.clone()),
        ];

        let response: NearbySearchResponse =
            self.get_json("place/nearbysearch/json", &params).await?;

        if let Some(msg) = &response.error_message {
            log::warn!(
                "Google Places nearby search status {} for {}: {}",
                response.status,
                request.place_type,
                msg
            );
        } else {
            log::debug!(
                "Google Places search for {} returned {} results ({})",
                request.place_type,
                response.results.len(),
                response.status
            );
        }

        Ok(response)
    }

    /// Request a route between two points
    async fn route(&self, request: &RouteRequest) -> Result<DirectionsResponse, LookupError> {
        log::debug!(
            "Google directions lookup: origin={}, destination={}, mode={}",
            request.origin.to_query_param(),
            request.destination.to_query_param(),
            request.travel_mode.as_provider_param()
        );

        let params = [
            ("origin", request.origin.to_query_param()),
            ("destination", request.destination.to_query_param()),
            ("mode", request.travel_mode.as_provider_param().to_string()),
        ];

        let response: DirectionsResponse = self.get_json("directions/json", &params).await?;

        if response.status != "OK" {
            log::warn!(
                "Google directions status {}: {}",
                response.status,
                response.error_message.as_deref().unwrap_or("no message")
            );
        }

        Ok(response)
    }
}
