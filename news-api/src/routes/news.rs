//! News-related API endpoints

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use news_core::{NewsDigest, NewsItem};
use news_services::{build_digest, DateRequest, DigestQuery};

use crate::error::ApiError;
use crate::AppState;

/// Query parameters for the raw news list
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    /// "yesterday", "today" or YYYY-MM-DD; today when omitted
    pub date: Option<String>,
}

/// Query parameters for the digest
#[derive(Debug, Deserialize)]
pub struct DigestParams {
    pub date: Option<String>,
    pub group: Option<String>,
    pub sub: Option<String>,
    /// Free-text search
    pub q: Option<String>,
}

/// Create news routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(get_news))
        .route("/news/digest", get(get_digest))
}

/// GET /api/news - Raw records of one day in merge order
async fn get_news(
    State(state): State<AppState>,
    Query(params): Query<NewsQuery>,
) -> Result<Json<Vec<NewsItem>>, ApiError> {
    let request = DateRequest::from_param(params.date.as_deref())?;
    let resolved = state.resolver.resolve(request).await?;

    Ok(Json(resolved.items))
}

/// GET /api/news/digest - Classified, grouped and filtered view of one day
async fn get_digest(
    State(state): State<AppState>,
    Query(params): Query<DigestParams>,
) -> Result<Json<NewsDigest>, ApiError> {
    let request = DateRequest::from_param(params.date.as_deref())?;
    let resolved = state.resolver.resolve(request).await?;

    let query = DigestQuery {
        group: params.group,
        sub: params.sub,
        q: params.q,
    };
    let digest = build_digest(resolved, &query);
    info!(
        "Built digest for {}: {} items in {} section(s)",
        digest.date,
        digest.total,
        digest.sections.len()
    );

    Ok(Json(digest))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use news_services::MemoryShardSource;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Environment;
    use crate::routes::{app, test_state};

    fn app_with(source: MemoryShardSource) -> Router {
        app(test_state(source, Environment::Development))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn day_source() -> MemoryShardSource {
        MemoryShardSource::new()
            .with_shard(
                "permanent.json",
                r#"[{"headline": "Dauerhaft", "category": "Podcast", "source_url": "https://example.com/p"}]"#,
            )
            .with_shard(
                "2026-02-09.json",
                r#"[
                    {"headline": "Schirennen", "teaser": "Slalom", "category": "Sport", "source_url": "https://orf.at/s/1"},
                    {"headline": "Derby", "teaser": "Bundesliga", "category": "Sport", "source_url": "https://orf.at/s/2"},
                    {"headline": "Verborgen", "category": "Sport", "source_url": "https://orf.at/s/3", "ignore": true}
                ]"#,
            )
            .with_shard("2026-02-09-late.json", "not json")
    }

    #[tokio::test]
    async fn test_news_returns_raw_records_in_merge_order() {
        let (status, body) = get(app_with(day_source()), "/api/news?date=2026-02-09").await;

        assert_eq!(status, StatusCode::OK);
        let headlines: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["headline"].as_str().unwrap())
            .collect();
        assert_eq!(headlines, vec!["Dauerhaft", "Schirennen", "Derby", "Verborgen"]);
        assert_eq!(body[3]["ignore"], true);
    }

    #[tokio::test]
    async fn test_news_defaults_to_today() {
        let (status, body) = get(app_with(day_source()), "/api/news").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_news_not_found() {
        let source = MemoryShardSource::new().with_shard("2026-02-09.json", "[]");
        let (status, body) = get(app_with(source), "/api/news?date=yesterday").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Keine Nachrichten für dieses Datum verfügbar");
    }

    #[tokio::test]
    async fn test_news_directory_unavailable() {
        let (status, body) = get(app_with(MemoryShardSource::unavailable()), "/api/news").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"].as_str().unwrap().contains("nicht verfügbar"));
    }

    #[tokio::test]
    async fn test_news_invalid_date() {
        let (status, _) = get(app_with(day_source()), "/api/news?date=morgen").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_digest_classifies_and_prioritizes() {
        let (status, body) = get(app_with(day_source()), "/api/news/digest?date=2026-02-09").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], "2026-02-09");
        assert_eq!(body["display_date"], "Montag, 9. Februar 2026");
        assert_eq!(body["total"], 3);
        assert_eq!(body["navigation"][0]["group"], "Österreich");
        assert_eq!(body["navigation"][0]["subs"][0], "Sport");

        let austria = &body["sections"][0];
        assert_eq!(austria["group"], "Österreich");
        assert_eq!(austria["items"][0]["headline"], "Derby");
        assert_eq!(austria["items"][0]["football"], true);
        assert_eq!(austria["items"][1]["headline"], "Schirennen");
        assert_eq!(body["sections"][1]["group"], "Allgemein");
    }

    #[tokio::test]
    async fn test_digest_filters_by_group() {
        let (status, body) = get(
            app_with(day_source()),
            "/api/news/digest?date=2026-02-09&group=Allgemein",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["sections"][0]["items"][0]["headline"], "Dauerhaft");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(app_with(day_source()), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["timezone"], "Europe/Vienna");
    }
}
