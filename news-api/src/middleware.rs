//! HTTP middleware

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

/// Redirect plain HTTP requests to HTTPS
///
/// The server runs behind a TLS-terminating proxy, so the original scheme is
/// taken from `x-forwarded-proto`.
pub async fn https_redirect(req: Request, next: Next) -> Response {
    let forwarded_https = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|proto| proto.eq_ignore_ascii_case("https"));
    if forwarded_https {
        return next.run(req).await;
    }

    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let Some(host) = host else {
        return next.run(req).await;
    };

    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let location = format!("https://{}{}", host, path);
    debug!("Redirecting to {}", location);

    Redirect::permanent(&location).into_response()
}
