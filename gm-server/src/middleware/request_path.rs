//! The single error-mapping boundary.
//!
//! [`ApiError`] responses leave their serialized body in response
//! extensions; this outermost middleware is the one place that knows the
//! request path and rewrites the body with it filled in.

use crate::api::error::ApiErrorBody;

use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

pub async fn stamp_error_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    if let Some(body) = response.extensions_mut().remove::<ApiErrorBody>() {
        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ApiErrorBody { path, ..body };
        return (status, Json(body)).into_response();
    }

    response
}
