//! Authentication REST API handlers

use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::login_response::LoginResponse;
use crate::api::auth::user_info_response::UserInfoResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::middleware::authenticate::bearer_token;
use crate::state::AppState;

use axum::{Json, extract::State, http::HeaderMap, http::StatusCode};
use log::{info, warn};

/// POST /api/v1/auth/login
///
/// Username/password login; issues the access/refresh token pair.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    if request.username.trim().is_empty() {
        return Err(ApiError::validation("username is required", Some("username")));
    }
    if request.password.is_empty() {
        return Err(ApiError::validation("password is required", Some("password")));
    }

    let identity = state
        .identity
        .find_by_subject(&request.username)
        .await?
        .filter(|identity| identity.is_active())
        .ok_or_else(|| {
            warn!("Login failed for {}", request.username);
            ApiError::unauthorized()
        })?;

    if !gm_auth::verify_password(&request.password, &identity.password_hash)? {
        warn!("Login failed for {}", request.username);
        return Err(ApiError::unauthorized());
    }

    let access_token = state.tokens.issue_access(&identity.username)?;
    let refresh_token = state.tokens.issue_refresh(&identity.username)?;

    info!(
        "Login succeeded: {} ({})",
        identity.username, identity.user_type
    );

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        user_id: Some(identity.user_id),
        username: identity.username,
        user_type: Some(identity.user_type),
        expires_in: state.tokens.access_ttl_secs(),
    }))
}

/// POST /api/v1/auth/refresh
///
/// Exchanges a refresh token (bearer) for a new access token. The refresh
/// token itself is echoed back unchanged; nothing is revoked.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<LoginResponse>> {
    let refresh_token = bearer_token(&headers).ok_or_else(ApiError::unauthorized)?;

    let claims = state.tokens.verify(&refresh_token)?;
    let access_token = state.tokens.issue_access(&claims.sub)?;

    info!("Token refreshed for {}", claims.sub);

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        user_id: None,
        username: claims.sub,
        user_type: None,
        expires_in: state.tokens.access_ttl_secs(),
    }))
}

/// POST /api/v1/auth/logout
///
/// Deliberately a no-op: there is no revocation store, so issued tokens
/// stay valid until expiry. Clients drop their copies.
pub async fn logout(CurrentUser(principal): CurrentUser) -> StatusCode {
    info!("Logout: {}", principal.username);
    StatusCode::OK
}

/// GET /api/v1/auth/me
pub async fn me(CurrentUser(principal): CurrentUser) -> Json<UserInfoResponse> {
    Json(UserInfoResponse::from(&principal))
}
