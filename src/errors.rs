// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for the lookup client and its handlers

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Lookup-specific error types
/// DOCUMENTATION: Every failure the lookup client or its HTTP surface can report.
/// `SdkUnavailable` and `DirectionsUnavailable` are the two kinds callers are
/// expected to present with a retry affordance.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Maps SDK is not loaded")]
    SdkUnavailable,

    #[error("Directions unavailable (provider status: {status})")]
    DirectionsUnavailable { status: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Provider request timed out after {0}s")]
    Timeout(u64),
}

impl LookupError {
    /// Stable machine-readable code for the JSON error body
    pub fn code(&self) -> &'static str {
        match self {
            LookupError::SdkUnavailable => "SDK_UNAVAILABLE",
            LookupError::DirectionsUnavailable { .. } => "DIRECTIONS_UNAVAILABLE",
            LookupError::InvalidInput(_) => "INVALID_INPUT",
            LookupError::ValidationError(_) => "VALIDATION_ERROR",
            LookupError::ExternalApiError(_) => "EXTERNAL_API_ERROR",
            LookupError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            LookupError::Timeout(_) => "TIMEOUT",
        }
    }

    /// Whether the consumer should offer a retry
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LookupError::SdkUnavailable
                | LookupError::DirectionsUnavailable { .. }
                | LookupError::ExternalApiError(_)
                | LookupError::RateLimitExceeded
                | LookupError::Timeout(_)
        )
    }
}

/// Convert LookupError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for LookupError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "retryable": self.is_retryable(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            LookupError::SdkUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            LookupError::DirectionsUnavailable { .. } => StatusCode::BAD_GATEWAY,
            LookupError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            LookupError::ValidationError(_) => StatusCode::BAD_REQUEST,
            LookupError::ExternalApiError(_) => StatusCode::BAD_GATEWAY,
            LookupError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            LookupError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}
