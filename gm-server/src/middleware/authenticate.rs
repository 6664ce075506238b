//! Per-request identity resolution.
//!
//! Extracts the bearer credential, verifies it, loads the subject's current
//! role and status, and binds a [`Principal`] to the request. Every failure
//! mode degrades to "unauthenticated" and lets the request continue; route
//! authorization decides later whether that is acceptable. This middleware
//! never aborts the pipeline on its own.

use crate::state::AppState;

use gm_auth::Principal;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use log::{debug, error};

/// Paths the resolver skips entirely; the credential is never touched.
const AUTH_EXEMPT_PREFIXES: &[&str] = &[
    "/api/v1/auth/login",
    "/api/v1/auth/refresh",
    "/api/v1/public",
    "/health",
    "/live",
    "/ready",
    "/docs",
];

pub fn is_auth_exempt(path: &str) -> bool {
    AUTH_EXEMPT_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Pull the token out of `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(http::header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if is_auth_exempt(request.uri().path()) {
        return next.run(request).await;
    }

    // No credential: some routes are public, so keep going unauthenticated.
    let Some(token) = bearer_token(request.headers()) else {
        return next.run(request).await;
    };

    let claims = match state.tokens.verify(&token) {
        Ok(claims) => claims,
        Err(e) => {
            debug!("Token verification failed: {}", e);
            return next.run(request).await;
        }
    };

    match state.identity.find_by_subject(&claims.sub).await {
        Ok(Some(identity)) if identity.is_active() => {
            let principal = Principal::from_identity(&identity);
            debug!(
                "Authenticated {} ({})",
                principal.username, principal.user_type
            );
            request.extensions_mut().insert(principal);
        }
        Ok(_) => {
            // Unknown subject and disabled account look the same from here.
            debug!("Subject not resolvable to an active identity");
        }
        Err(e) => {
            error!("Identity store lookup failed: {}", e);
        }
    }

    next.run(request).await
}
