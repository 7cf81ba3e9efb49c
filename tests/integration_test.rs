//! Full-stack tests: a real server on a local socket, driven over HTTP the
//! way the desktop admin panel and folio-indexctl drive it.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

use rfolio::indexing::{
    Delays, IndexingClient, IndexingError, NotificationType, UrlNotificationApi,
};
use rfolio::server::{router, ServerState, AVAILABLE_ACTIONS};
use rfolio::site;

const BASE: &str = "https://example.dev";

/// Records every collaborator call so tests can assert what a server
/// operation actually published.
#[derive(Clone, Default)]
struct RecordingApi {
    published: Arc<Mutex<Vec<String>>>,
    pinged: Arc<Mutex<Vec<String>>>,
    fail_publishes: bool,
}

#[async_trait]
impl UrlNotificationApi for RecordingApi {
    async fn publish(&self, url: &str, _kind: NotificationType) -> rfolio::indexing::Result<Value> {
        self.published.lock().unwrap().push(url.to_string());
        if self.fail_publishes {
            Err(IndexingError::Endpoint { status: 429, body: "rate limited".into() })
        } else {
            Ok(json!({ "urlNotificationMetadata": { "url": url } }))
        }
    }

    async fn metadata(&self, url: &str) -> rfolio::indexing::Result<Value> {
        Ok(json!({ "url": url, "latestUpdate": { "type": "URL_UPDATED" } }))
    }

    async fn ping_sitemap(&self, sitemap_url: &str) -> rfolio::indexing::Result<()> {
        self.pinged.lock().unwrap().push(sitemap_url.to_string());
        Ok(())
    }
}

/// Binds the router to an ephemeral port and serves it from a background
/// task. Returns the bound address.
async fn spawn_server(api: RecordingApi) -> Result<SocketAddr> {
    let delays = Delays {
        submit: Duration::from_millis(1),
        reindex: Duration::from_millis(1),
        recrawl: Duration::from_millis(1),
    };
    let state = Arc::new(ServerState {
        client: IndexingClient::with_delays(api, delays),
        base_url: BASE.to_string(),
    });
    let app = router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(addr)
}

async fn post_action(addr: SocketAddr, body: Value) -> Result<(u16, Value)> {
    let response = reqwest::Client::new()
        .post(format!("http://{}/api/indexing", addr))
        .json(&body)
        .send()
        .await?;
    let status = response.status().as_u16();
    Ok((status, response.json().await?))
}

async fn get_body(addr: SocketAddr, path: &str) -> Result<(u16, String)> {
    let response = reqwest::get(format!("http://{}{}", addr, path)).await?;
    let status = response.status().as_u16();
    Ok((status, response.text().await?))
}

#[tokio::test]
async fn test_complete_reindex_publishes_the_whole_catalog() -> Result<()> {
    let api = RecordingApi::default();
    let published = api.published.clone();
    let pinged = api.pinged.clone();
    let addr = spawn_server(api).await?;

    let (status, body) = post_action(addr, json!({ "action": "complete-reindex" })).await?;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let expected = site::all_urls(BASE);
    let summary = &body["data"]["summary"];
    assert_eq!(summary["totalUrls"].as_u64().unwrap() as usize, expected.len());
    assert_eq!(
        summary["successfulSubmissions"].as_u64().unwrap() as usize,
        expected.len()
    );
    assert_eq!(summary["failedSubmissions"], 0);

    // The collaborator saw the sitemap first, then every catalog URL in
    // catalog order.
    assert_eq!(*pinged.lock().unwrap(), vec![format!("{}/sitemap.xml", BASE)]);
    assert_eq!(*published.lock().unwrap(), expected);
    Ok(())
}

#[tokio::test]
async fn test_quick_update_touches_sitemap_and_priority_urls() -> Result<()> {
    let api = RecordingApi::default();
    let published = api.published.clone();
    let addr = spawn_server(api).await?;

    let (status, body) = post_action(addr, json!({ "action": "quick-update" })).await?;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["sitemapPing"]["success"], true);

    let submissions = body["urlSubmissions"].as_array().unwrap();
    let expected = site::priority_urls(BASE);
    assert_eq!(submissions.len(), expected.len());
    for (submission, url) in submissions.iter().zip(&expected) {
        assert_eq!(submission["url"].as_str().unwrap(), url);
        assert_eq!(submission["success"], true);
    }
    assert_eq!(*published.lock().unwrap(), expected);
    Ok(())
}

#[tokio::test]
async fn test_failed_submissions_are_counted_not_propagated() -> Result<()> {
    let addr = spawn_server(RecordingApi {
        fail_publishes: true,
        ..Default::default()
    })
    .await?;

    let (status, body) = post_action(addr, json!({ "action": "complete-reindex" })).await?;

    // HTTP still succeeds; the failures only show up in the counts.
    assert_eq!(status, 200);
    let summary = &body["data"]["summary"];
    let total = summary["totalUrls"].as_u64().unwrap();
    assert_eq!(summary["failedSubmissions"].as_u64().unwrap(), total);
    assert_eq!(summary["successfulSubmissions"], 0);

    let first = &body["data"]["urlSubmissions"][0];
    assert_eq!(first["success"], false);
    assert!(first["error"].as_str().unwrap().contains("429"));
    Ok(())
}

#[tokio::test]
async fn test_status_round_trip_over_http() -> Result<()> {
    let addr = spawn_server(RecordingApi::default()).await?;

    let (status, body) = get_body(
        addr,
        &format!("/api/indexing?url={}/apps/packet-lens", BASE),
    )
    .await?;
    assert_eq!(status, 200);

    let parsed: Value = serde_json::from_str(&body)?;
    assert_eq!(parsed["success"], true);
    assert_eq!(
        parsed["data"]["url"].as_str().unwrap(),
        format!("{}/apps/packet-lens", BASE)
    );
    Ok(())
}

#[tokio::test]
async fn test_unknown_action_rejected_with_action_list() -> Result<()> {
    let addr = spawn_server(RecordingApi::default()).await?;

    let (status, body) = post_action(addr, json!({ "action": "defragment" })).await?;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid action");

    let advertised: Vec<&str> = body["availableActions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(advertised, AVAILABLE_ACTIONS);
    Ok(())
}

#[tokio::test]
async fn test_seo_documents_agree_with_the_catalog() -> Result<()> {
    let addr = spawn_server(RecordingApi::default()).await?;

    let (status, sitemap) = get_body(addr, "/sitemap.xml").await?;
    assert_eq!(status, 200);
    for url in site::all_urls(BASE) {
        assert!(
            sitemap.contains(&format!("<loc>{}</loc>", url)),
            "sitemap is missing {}",
            url
        );
    }

    let (status, robots) = get_body(addr, "/robots.txt").await?;
    assert_eq!(status, 200);
    assert!(robots.contains(&format!("Sitemap: {}/sitemap.xml", BASE)));
    assert!(robots.contains("Disallow: /api/"));

    let (status, home) = get_body(addr, "/").await?;
    assert_eq!(status, 200);
    assert!(home.contains("application/ld+json"));
    assert!(home.contains(site::OWNER_NAME));
    Ok(())
}
