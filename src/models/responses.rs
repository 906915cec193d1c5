//! Response DTOs for the posting API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Token type reported alongside every issued access token
pub const TOKEN_TYPE: &str = "bearer";

/// Response body for POST /signup and POST /login
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    /// Wraps an encoded access token
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: TOKEN_TYPE.to_string(),
        }
    }
}

/// Response body for DELETE /deletepost/:post_id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub detail: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self {
            detail: "Post deleted".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Message describing what went wrong
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
