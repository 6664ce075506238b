//! Per-route role enforcement.
//!
//! A static table maps path prefixes to the minimum role; the check runs
//! before the handler, against the principal bound by authentication.
//! A guarded route with no principal is a 401; a bound principal below the
//! minimum is a 403. Neither response says which check failed.

use crate::api::error::ApiError;
use crate::middleware::authenticate::is_auth_exempt;

use gm_auth::Principal;
use gm_core::UserType;

use axum::{extract::Request, middleware::Next, response::IntoResponse, response::Response};
use log::debug;

/// Route requirement table: first matching prefix wins.
const ROUTE_REQUIREMENTS: &[(&str, UserType)] = &[
    ("/api/v1/businesses", UserType::Owner),
    ("/api/v1/members", UserType::Employee),
    ("/api/v1/products", UserType::Employee),
    ("/api/v1/lockers", UserType::Employee),
    ("/api/v1/auth/logout", UserType::Member),
    ("/api/v1/auth/me", UserType::Member),
];

/// Minimum role for `path`, or None when the route is open.
/// Unlisted API routes still require an authenticated caller.
fn required_role(path: &str) -> Option<UserType> {
    if let Some((_, role)) = ROUTE_REQUIREMENTS
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
    {
        return Some(*role);
    }

    if path.starts_with("/api/v1") && !is_auth_exempt(path) {
        return Some(UserType::Member);
    }

    None
}

pub async fn authorize(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let Some(required) = required_role(path) else {
        return next.run(request).await;
    };

    match request.extensions().get::<Principal>() {
        None => ApiError::unauthorized().into_response(),
        Some(principal) if !principal.satisfies_role(required) => {
            debug!(
                "Role {} below minimum {} for {}",
                principal.user_type, required, path
            );
            ApiError::forbidden("Access denied").into_response()
        }
        Some(_) => next.run(request).await,
    }
}
