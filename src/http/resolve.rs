//! Resolution endpoint handler.
//!
//! The browser calls `GET /resolve?url=<activated URL>` and follows the
//! `302` to the render page. Input that cannot be resolved is logged and
//! redirected to the bare render page, so the user still lands on a page.

use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Query parameter the registered handler template substitutes into.
pub const URL_PARAM: &str = "url";

/// Percent-decoded `url` parameter, if present and non-empty.
pub fn activated_url(raw_query: Option<&str>) -> Option<String> {
    raw_query.and_then(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, value)| key == URL_PARAM && !value.is_empty())
            .map(|(_, value)| value.into_owned())
    })
}

pub async fn resolve_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let start = Instant::now();
    let request_id = request_id(&headers);

    let Some(raw) = activated_url(query.as_deref()) else {
        tracing::warn!(request_id = %request_id, "Resolve request without url parameter");
        metrics::record_resolution("missing_url", start);
        return found(state.resolver.render_endpoint());
    };

    match state.resolver.resolve(&raw) {
        Ok(resolved) => {
            tracing::debug!(
                request_id = %request_id,
                url = %raw,
                location = %resolved,
                "Resolved protocol URL"
            );
            metrics::record_resolution("resolved", start);
            found(resolved.as_str())
        }
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                url = %raw,
                kind = e.kind(),
                error = %e,
                "Could not resolve protocol URL"
            );
            metrics::record_resolution(e.kind(), start);
            found(state.resolver.render_endpoint())
        }
    }
}

fn found(location: &str) -> Response {
    let location =
        HeaderValue::from_str(location).unwrap_or_else(|_| HeaderValue::from_static("/"));
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
