//! Tenant resolution and lifecycle.
//!
//! Resolves the business id for the request (header first, then query
//! parameter), binds it inside a fresh [`TenantContext::scope`], and runs
//! the rest of the stack inside that scope. Release is structural: when the
//! scope future finishes - success, error response, or cancellation - the
//! binding is gone. No exit path can carry one request's business into the
//! next.

use crate::api::error::ApiError;

use gm_core::{BusinessId, TenantContext};

use axum::{extract::Request, middleware::Next, response::IntoResponse, response::Response};
use log::{debug, warn};

const BUSINESS_ID_HEADER: &str = "X-Business-Id";
const BUSINESS_ID_PARAM: &str = "businessId";

/// Routes that may run without a business bound (login, refresh, tenant
/// administration, probes).
const TENANT_EXEMPT_PREFIXES: &[&str] = &[
    "/api/v1/auth",
    "/api/v1/public",
    "/api/v1/businesses",
    "/health",
    "/live",
    "/ready",
    "/docs",
];

pub fn is_tenant_exempt(path: &str) -> bool {
    TENANT_EXEMPT_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Resolution order: header, query parameter, (future: token claim).
/// The first parseable candidate wins; unparseable ones are logged and
/// skipped.
fn extract_business_id(request: &Request) -> Option<BusinessId> {
    if let Some(value) = request.headers().get(BUSINESS_ID_HEADER)
        && let Ok(raw) = value.to_str()
    {
        match raw.parse::<BusinessId>() {
            Ok(id) => return Some(id),
            Err(_) => warn!("Invalid business id in header: {}", raw),
        }
    }

    if let Some(query) = request.uri().query() {
        for pair in query.split('&') {
            if let Some(raw) = pair.strip_prefix(BUSINESS_ID_PARAM)
                && let Some(raw) = raw.strip_prefix('=')
            {
                match raw.parse::<BusinessId>() {
                    Ok(id) => return Some(id),
                    Err(_) => warn!("Invalid business id in parameter: {}", raw),
                }
            }
        }
    }

    None
}

pub async fn resolve_tenant(request: Request, next: Next) -> Response {
    let resolved = extract_business_id(&request);
    let path = request.uri().path().to_string();

    TenantContext::scope(async move {
        match resolved {
            Some(business) => {
                if let Err(e) = TenantContext::set(business) {
                    return ApiError::from(e).into_response();
                }
                debug!("Tenant context set to business {} for {}", business, path);
            }
            None => {
                if !is_tenant_exempt(&path) {
                    warn!("Business id required but not found for {}", path);
                    return ApiError::tenant_required().into_response();
                }
            }
        }

        next.run(request).await
    })
    .await
}
