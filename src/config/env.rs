// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8003)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Maps API key (Places, Directions and Photo endpoints).
    /// Empty means the maps SDK is never loaded.
    pub google_maps_api_key: String,

    /// Base URL for the Google Maps web services
    pub maps_api_base_url: String,

    /// Per-request timeout for provider calls in seconds (0 disables)
    pub request_timeout_secs: u64,

    /// Outgoing provider requests allowed per second
    pub provider_rate_limit_per_sec: u32,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8003".to_string())
                .parse()
                .unwrap_or(8003),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            // Older deployments only set the Places key
            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY")
                .or_else(|_| env::var("GOOGLE_PLACES_API_KEY"))
                .unwrap_or_default(),

            maps_api_base_url: env::var("MAPS_API_BASE_URL")
                .unwrap_or_else(|_| "https://maps.googleapis.com/maps/api".to_string()),

            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),

            provider_rate_limit_per_sec: env::var("PROVIDER_RATE_LIMIT_PER_SEC")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .unwrap_or(50),
        }
    }

    /// API key, if one is configured
    pub fn api_key(&self) -> Option<&str> {
        let key = self.google_maps_api_key.trim();
        (!key.is_empty()).then_some(key)
    }

    /// Provider timeout, `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.maps_api_base_url.is_empty() {
            return Err("MAPS_API_BASE_URL must not be empty".to_string());
        }

        if self.provider_rate_limit_per_sec == 0 {
            return Err("PROVIDER_RATE_LIMIT_PER_SEC must be greater than zero".to_string());
        }

        if self.api_key().is_none() {
            log::warn!("GOOGLE_MAPS_API_KEY not configured - lookups will report SDK unavailable");
        }

        Ok(())
    }
}

#[cfg(test)]
impl Config {
    /// Deterministic configuration for tests, independent of the process environment
    pub fn for_tests(api_key: &str, base_url: &str) -> Self {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 0,
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            google_maps_api_key: api_key.to_string(),
            maps_api_base_url: base_url.to_string(),
            request_timeout_secs: 5,
            provider_rate_limit_per_sec: 100,
        }
    }
}
