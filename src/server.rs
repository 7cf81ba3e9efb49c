//! The public web surface: the indexing API, SEO documents, and the home
//! page shell.
//!
//! Action dispatch mirrors the admin contract the CLI and the GUI admin panel
//! speak: one POST endpoint taking `{ action, url?, urls?, baseUrl? }`,
//! validation failures as 400s, collaborator failures folded into 200-level
//! outcome objects, and malformed bodies as 500s.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::indexing::{IndexingClient, NotificationType, UrlNotificationApi};
use crate::seo;

pub const AVAILABLE_ACTIONS: [&str; 7] = [
    "submit",
    "submit-multiple",
    "status",
    "ping-sitemap",
    "complete-reindex",
    "force-recrawl",
    "quick-update",
];

/// Shared state passed to all request handlers.
pub struct ServerState<A> {
    pub client: IndexingClient<A>,
    pub base_url: String,
}

/// Request body for `POST /api/indexing`.
#[derive(Debug, Deserialize)]
pub struct IndexingRequest {
    action: Option<String>,
    url: Option<String>,
    urls: Option<Vec<String>>,
    #[serde(rename = "baseUrl")]
    base_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    url: Option<String>,
}

/// Builds the application router.
pub fn router<A: UrlNotificationApi + 'static>(state: Arc<ServerState<A>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home::<A>))
        .route("/sitemap.xml", get(sitemap::<A>))
        .route("/robots.txt", get(robots::<A>))
        .route(
            "/api/indexing",
            post(indexing_action::<A>).get(indexing_status::<A>),
        )
        .with_state(state)
        .layer(cors)
}

/// Binds the router and serves until ctrl-c.
pub async fn serve<A: UrlNotificationApi + 'static>(
    addr: SocketAddr,
    state: Arc<ServerState<A>>,
) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}

async fn indexing_action<A: UrlNotificationApi + 'static>(
    State(state): State<Arc<ServerState<A>>>,
    body: String,
) -> Response {
    // The body is parsed by hand so an unreadable payload surfaces as the
    // generic 500 rather than an extractor rejection.
    let request: IndexingRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "unreadable indexing request body");
            return internal_error(&e.to_string());
        }
    };

    let Some(action) = request.action.as_deref() else {
        return bad_request(json!({ "error": "Action is required" }));
    };
    info!(action, "indexing request");

    match action {
        "submit" => match request.url {
            Some(url) => {
                let outcome = state.client.submit_url(&url, NotificationType::Updated).await;
                Json(outcome).into_response()
            }
            None => bad_request(json!({ "error": "URL is required for submit action" })),
        },

        "submit-multiple" => match non_empty(request.urls) {
            Some(urls) => {
                let results = state.client.submit_multiple(&urls).await;
                Json(json!({
                    "success": true,
                    "results": results,
                    "message": format!("Processed {} URLs", urls.len()),
                }))
                .into_response()
            }
            None => bad_request(
                json!({ "error": "URLs array is required for submit-multiple action" }),
            ),
        },

        "status" => match request.url {
            Some(url) => Json(state.client.get_status(&url).await).into_response(),
            None => bad_request(json!({ "error": "URL is required for status action" })),
        },

        "ping-sitemap" => match request.url {
            Some(url) => Json(state.client.ping_sitemap(&url).await).into_response(),
            None => bad_request(
                json!({ "error": "Sitemap URL is required for ping-sitemap action" }),
            ),
        },

        "complete-reindex" => {
            let base = request.base_url.unwrap_or_else(|| state.base_url.clone());
            Json(state.client.complete_reindex(&base).await).into_response()
        }

        "force-recrawl" => match non_empty(request.urls) {
            Some(urls) => {
                let results = state.client.force_recrawl(&urls).await;
                Json(json!({
                    "success": true,
                    "results": results,
                    "message": format!("Force re-crawl initiated for {} URLs", urls.len()),
                }))
                .into_response()
            }
            None => bad_request(
                json!({ "error": "URLs array is required for force-recrawl action" }),
            ),
        },

        "quick-update" => {
            let base = request.base_url.unwrap_or_else(|| state.base_url.clone());
            Json(state.client.quick_update(&base).await).into_response()
        }

        _ => bad_request(json!({
            "error": "Invalid action",
            "availableActions": AVAILABLE_ACTIONS,
        })),
    }
}

async fn indexing_status<A: UrlNotificationApi + 'static>(
    State(state): State<Arc<ServerState<A>>>,
    Query(query): Query<StatusQuery>,
) -> Response {
    match query.url {
        Some(url) => Json(state.client.get_status(&url).await).into_response(),
        None => bad_request(json!({ "error": "URL parameter is required" })),
    }
}

async fn home<A: UrlNotificationApi + 'static>(
    State(state): State<Arc<ServerState<A>>>,
) -> Response {
    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        seo::home_html(&state.base_url),
    )
        .into_response()
}

async fn sitemap<A: UrlNotificationApi + 'static>(
    State(state): State<Arc<ServerState<A>>>,
) -> Response {
    let body = seo::sitemap_xml(&state.base_url, Utc::now().date_naive());
    (
        [
            (header::CONTENT_TYPE, "application/xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        body,
    )
        .into_response()
}

async fn robots<A: UrlNotificationApi + 'static>(
    State(state): State<Arc<ServerState<A>>>,
) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        seo::robots_txt(&state.base_url),
    )
        .into_response()
}

fn non_empty(urls: Option<Vec<String>>) -> Option<Vec<String>> {
    urls.filter(|urls| !urls.is_empty())
}

fn bad_request(body: Value) -> Response {
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error", "message": message })),
    )
        .into_response()
}
