use axum::{
    extract::Request,
    http::{header::HOST, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Middleware rejecting requests whose Host header is not on the allow-list.
///
/// An empty allow-list accepts any host (development convenience). The port
/// is ignored when comparing.
pub async fn enforce_allowed_hosts(
    allowed_hosts: Arc<Vec<String>>,
    request: Request,
    next: Next,
) -> Response {
    if allowed_hosts.is_empty() {
        return next.run(request).await;
    }

    let host = request
        .headers()
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .map(strip_port);

    match host {
        Some(host)
            if allowed_hosts
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(host)) =>
        {
            next.run(request).await
        }
        _ => (StatusCode::BAD_REQUEST, "Invalid Host header").into_response(),
    }
}

/// `example.com:8080` -> `example.com`, `[::1]:8080` -> `[::1]`.
fn strip_port(host: &str) -> &str {
    if let Some(end) = host.find(']') {
        // Bracketed IPv6 literal
        return &host[..=end];
    }
    host.split(':').next().unwrap_or(host)
}
