//! API route definitions

mod health;
mod news;

use axum::{
    http::{header, HeaderValue, Method},
    middleware, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::Environment;
use crate::middleware::https_redirect;
use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(news::routes())
        .merge(health::routes())
}

/// Full application: API, static client files and middleware
pub fn app(state: AppState) -> Router {
    let production = state.config.environment == Environment::Production;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let router = Router::new()
        .nest("/api", api_routes())
        .fallback_service(ServeDir::new(&state.config.public_dir))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    if production {
        router.layer(middleware::from_fn(https_redirect))
    } else {
        router
    }
}

#[cfg(test)]
pub(crate) fn test_state(
    source: news_services::MemoryShardSource,
    environment: Environment,
) -> AppState {
    use std::sync::Arc;

    use chrono_tz::Europe::Vienna;
    use news_services::{FixedClock, NewsCalendar, NewsResolver};

    let now = "2026-02-09T08:00:00Z"
        .parse()
        .expect("valid test instant");
    let config = crate::config::ServerConfig {
        environment,
        timezone: Vienna,
        ..Default::default()
    };

    AppState {
        resolver: Arc::new(NewsResolver::new(
            Arc::new(source),
            Arc::new(FixedClock(now)),
            NewsCalendar::new(config.timezone),
        )),
        config: Arc::new(config),
    }
}
