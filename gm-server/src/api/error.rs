//! REST API error types
//!
//! Every failure the API surfaces goes through this one type; the response
//! body shape is uniform across handlers and middleware:
//! `{error, message, status, timestamp, path}`. The request path is stamped
//! by the boundary middleware, the only place that knows it.

use gm_auth::AuthError;
use gm_core::CoreError;
use gm_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    /// Reason phrase ("Unauthorized", "Forbidden", "Not Found", ...)
    pub error: String,
    /// Human-readable message; deliberately generic for auth failures
    pub message: String,
    /// HTTP status code, duplicated in the body
    pub status: u16,
    /// RFC 3339 timestamp of the failure
    pub timestamp: String,
    /// Request path; empty until the boundary middleware fills it in
    pub path: String,
    /// Field name when this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication failure (401). The message never reveals which
    /// check failed.
    #[error("Unauthorized {location}")]
    Unauthorized { location: ErrorLocation },

    /// Role insufficient for the route (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Tenant-scoped route reached without a resolvable business (403)
    #[error("Business context required {location}")]
    TenantRequired { location: ErrorLocation },

    /// Row absent, or owned by another business (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed request payload (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Uniqueness conflict (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500); the original error is logged, never
    /// echoed to the client
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized() -> Self {
        Self::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn tenant_required() -> Self {
        Self::TenantRequired {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    fn body(&self) -> ApiErrorBody {
        let (status, error, message, field) = match self {
            Self::Unauthorized { .. } => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "Authentication required".to_string(),
                None,
            ),
            Self::Forbidden { message, .. } => {
                (StatusCode::FORBIDDEN, "Forbidden", message.clone(), None)
            }
            Self::TenantRequired { .. } => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                "Business context required".to_string(),
                None,
            ),
            Self::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, "Not Found", message.clone(), None)
            }
            Self::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                "Bad Request",
                message.clone(),
                field.clone(),
            ),
            Self::Conflict { message, .. } => {
                (StatusCode::CONFLICT, "Conflict", message.clone(), None)
            }
            Self::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                message.clone(),
                None,
            ),
        };

        ApiErrorBody {
            error: error.to_string(),
            message,
            status: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            path: String::new(),
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log with location for debugging; the client body stays sanitized
        log::error!("{}", self);

        let body = self.body();
        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = (status, Json(body.clone())).into_response();
        // Leave the body for the boundary middleware to stamp the path into
        response.extensions_mut().insert(body);
        response
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let caller = Location::caller();
        match e {
            DbError::EntityNotFound { entity, id, .. } => Self::NotFound {
                message: format!("{} {} not found", entity, id),
                location: ErrorLocation::from(caller),
            },
            DbError::TenantContextNotSet { .. } => Self::TenantRequired {
                location: ErrorLocation::from(caller),
            },
            DbError::Sqlx { ref source, .. } => {
                if let sqlx::Error::Database(db_error) = source
                    && db_error.is_unique_violation()
                {
                    return Self::Conflict {
                        message: "A row with the same unique value already exists".to_string(),
                        location: ErrorLocation::from(caller),
                    };
                }
                log::error!("Database error: {}", e);
                Self::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(caller),
                }
            }
            other => {
                log::error!("Database error: {}", other);
                Self::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(caller),
                }
            }
        }
    }
}

/// Convert auth-layer errors to API errors.
///
/// Token failures collapse to one generic 401; only infrastructure
/// failures surface as 500.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let caller = Location::caller();
        match e {
            AuthError::IdentityStore { .. }
            | AuthError::PasswordHash { .. }
            | AuthError::Signing { .. } => {
                log::error!("Auth infrastructure error: {}", e);
                Self::Internal {
                    message: "Authentication service failure".to_string(),
                    location: ErrorLocation::from(caller),
                }
            }
            _ => Self::Unauthorized {
                location: ErrorLocation::from(caller),
            },
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let caller = Location::caller();
        match e {
            CoreError::TenantContextNotSet { .. } => Self::TenantRequired {
                location: ErrorLocation::from(caller),
            },
            CoreError::Validation { message, .. } => Self::Validation {
                message,
                field: None,
                location: ErrorLocation::from(caller),
            },
            other => Self::Validation {
                message: other.to_string(),
                field: None,
                location: ErrorLocation::from(caller),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
