//! Axum extractor for the authenticated principal

use crate::api::error::ApiError;
use crate::state::AppState;

use gm_auth::Principal;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Extracts the principal bound by the authentication middleware.
///
/// Rejects with 401 when the request carries no authenticated identity.
pub struct CurrentUser(pub Principal);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<Principal>()
                .cloned()
                .map(CurrentUser)
                .ok_or_else(ApiError::unauthorized)
        }
    }
}
