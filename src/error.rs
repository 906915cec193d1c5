//! Error types for the posting API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::auth::TokenError;
use crate::models::ErrorResponse;
use crate::storage::StorageError;

// == API Error Enum ==
/// Unified error type for the posting API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing, malformed, expired or unresolvable credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Post does not exist or belongs to someone else
    #[error("{0}")]
    NotFound(String),

    /// Post text over the size limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Body failed shape validation
    #[error("{0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Rejection used for every token or credential failure during request auth.
    pub fn invalid_credentials() -> Self {
        ApiError::Unauthorized("Could not validate credentials".to_string())
    }

    /// HTTP status code reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == Conversions ==
impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encoding(msg) => ApiError::Internal(msg),
            _ => ApiError::invalid_credentials(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(msg) = &self {
            tracing::error!(error = %msg, "request failed");
        }

        let body = Json(ErrorResponse::new(self.to_string()));
        let mut response = (status, body).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Bearer"),
            );
        }

        response
    }
}

// == Result Type Alias ==
/// Convenience Result type for the posting API.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_error_status_codes() {
        let test_cases = vec![
            (ApiError::invalid_credentials(), StatusCode::UNAUTHORIZED),
            (ApiError::NotFound("Post not found".into()), StatusCode::NOT_FOUND),
            (
                ApiError::PayloadTooLarge("Payload too large".into()),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                ApiError::InvalidRequest("bad".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.into_response().status(), expected_status);
        }
    }

    #[test]
    fn test_unauthorized_sets_www_authenticate() {
        let response = ApiError::invalid_credentials().into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );

        let response = ApiError::NotFound("Post not found".into()).into_response();
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[tokio::test]
    async fn test_error_body_has_detail() {
        let response = ApiError::NotFound("Post not found".into()).into_response();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["detail"], "Post not found");
    }

    #[test]
    fn test_token_errors_map_to_unauthorized() {
        let err: ApiError = TokenError::Expired.into();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);

        let err: ApiError = TokenError::Encoding("bad key".into()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
