use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

// These are served as 403 rather than 400/422. The 0.1 API already defined 403 as the
// validation status and 0.2 keeps it for compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingBase,
    MissingSymbol,
    MissingAmount,
    InvalidAmount,
    InvalidDateType,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingBase => "Please supply a base currency symbol",
            ValidationError::MissingSymbol => "Please supply a currency symbol to convert to",
            ValidationError::MissingAmount => "Please supply an amount to convert",
            ValidationError::InvalidAmount => "Please supply the amount as a number",
            ValidationError::InvalidDateType => "Please provide the date as a string",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    /// Provider answered 401.
    UpstreamUnauthorized,
    /// Provider answered 502, was unreachable, or sent a body we could not decode.
    Upstream(String),
    /// Provider answered with a status we have no mapping for.
    UpstreamStatus(u16),
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::FORBIDDEN,
            ApiError::UpstreamUnauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::UpstreamStatus(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message handed back to the caller. Upstream details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Validation(e) => e.message().to_string(),
            ApiError::UpstreamUnauthorized => "Not Authorized".to_string(),
            ApiError::Upstream(_) => "API Error".to_string(),
            ApiError::UpstreamStatus(_) => "Unknown API status code".to_string(),
            ApiError::Internal(msg) => format!("Internal error: {}", msg),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::UpstreamUnauthorized => write!(f, "Upstream error: Not Authorized"),
            ApiError::Upstream(e) => write!(f, "Upstream error: {}", e),
            ApiError::UpstreamStatus(code) => {
                write!(f, "Upstream error: unknown status code {}", code)
            }
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        (err.status_code(), err.public_message())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    #[schema(example = 403)]
    pub code: u16,
    #[schema(example = "Please supply a base currency symbol")]
    pub message: String,
}

impl From<&ApiError> for ApiErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            message: err.public_message(),
        }
    }
}

/// JSON error body, used by API 0.2.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse::from(&self);
        (self.status_code(), Json(body)).into_response()
    }
}

/// Plain-text error body, kept for API 0.1 clients.
#[derive(Debug)]
pub struct LegacyApiError(pub ApiError);

impl From<ApiError> for LegacyApiError {
    fn from(err: ApiError) -> Self {
        LegacyApiError(err)
    }
}

impl IntoResponse for LegacyApiError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, String) = self.0.into();
        (status, body).into_response()
    }
}
