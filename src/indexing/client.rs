//! High-level indexing operations.
//!
//! Every operation converts its own failures into an [`IndexingOutcome`]
//! rather than propagating them: a batch never aborts halfway because one URL
//! was rejected, and callers always get one outcome per URL they asked about.
//! Batch operations pace themselves with a configurable delay between
//! consecutive calls so a full re-index stays under the endpoint's rate
//! limits.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::site;

use super::api::{NotificationType, UrlNotificationApi};

/// Pacing between consecutive calls in batch operations.
#[derive(Debug, Clone, Copy)]
pub struct Delays {
    pub submit: Duration,
    pub reindex: Duration,
    pub recrawl: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            submit: Duration::from_millis(1000),
            reindex: Duration::from_millis(1500),
            recrawl: Duration::from_millis(2000),
        }
    }
}

/// Result of one indexing operation. `success: false` outcomes carry the
/// collaborator's error text; nothing here is ever a Rust error.
#[derive(Debug, Clone, Serialize)]
pub struct IndexingOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IndexingOutcome {
    fn succeeded(message: String, data: Option<Value>) -> Self {
        Self { url: None, success: true, message, data, error: None }
    }

    fn failed(message: String, error: String) -> Self {
        Self { url: None, success: false, message, data: None, error: Some(error) }
    }

    fn tagged(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }
}

/// Aggregate counts for a full re-index.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReindexSummary {
    pub total_urls: usize,
    pub successful_submissions: usize,
    pub failed_submissions: usize,
}

/// Everything a complete re-index produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReindexReport {
    pub success: bool,
    pub message: String,
    pub data: ReindexData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReindexData {
    pub sitemap_ping: IndexingOutcome,
    pub summary: ReindexSummary,
    pub url_submissions: Vec<IndexingOutcome>,
}

/// Result of a quick update: one sitemap ping plus the priority URLs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickUpdateReport {
    pub success: bool,
    pub sitemap_ping: IndexingOutcome,
    pub url_submissions: Vec<IndexingOutcome>,
    pub message: String,
}

pub struct IndexingClient<A> {
    api: A,
    delays: Delays,
}

impl<A: UrlNotificationApi> IndexingClient<A> {
    pub fn new(api: A) -> Self {
        Self::with_delays(api, Delays::default())
    }

    pub fn with_delays(api: A, delays: Delays) -> Self {
        Self { api, delays }
    }

    /// Submits one URL. A single attempt, no retry.
    pub async fn submit_url(&self, url: &str, kind: NotificationType) -> IndexingOutcome {
        match self.api.publish(url, kind).await {
            Ok(data) => {
                info!(%url, kind = kind.as_str(), "submitted for indexing");
                IndexingOutcome::succeeded(
                    format!("Successfully submitted {} for indexing", url),
                    Some(data),
                )
            }
            Err(e) => {
                warn!(%url, error = %e, "indexing submission failed");
                IndexingOutcome::failed(
                    format!("Failed to submit {} for indexing", url),
                    e.to_string(),
                )
            }
        }
    }

    /// Looks up notification metadata for one URL.
    pub async fn get_status(&self, url: &str) -> IndexingOutcome {
        match self.api.metadata(url).await {
            Ok(data) => IndexingOutcome::succeeded(
                format!("Successfully retrieved indexing status for {}", url),
                Some(data),
            ),
            Err(e) => {
                warn!(%url, error = %e, "status lookup failed");
                IndexingOutcome::failed(
                    format!("Failed to get indexing status for {}", url),
                    e.to_string(),
                )
            }
        }
    }

    /// Submits a batch sequentially, pacing consecutive submissions with the
    /// submit delay. Failures are isolated per URL.
    pub async fn submit_multiple(&self, urls: &[String]) -> Vec<IndexingOutcome> {
        self.submit_paced(urls, NotificationType::Updated, self.delays.submit)
            .await
    }

    /// Notifies the sitemap ping endpoint. Success is decided solely by the
    /// HTTP status the endpoint returns.
    pub async fn ping_sitemap(&self, sitemap_url: &str) -> IndexingOutcome {
        match self.api.ping_sitemap(sitemap_url).await {
            Ok(()) => {
                info!(%sitemap_url, "sitemap pinged");
                IndexingOutcome::succeeded(
                    format!("Successfully pinged sitemap: {}", sitemap_url),
                    None,
                )
            }
            Err(e) => {
                warn!(%sitemap_url, error = %e, "sitemap ping failed");
                IndexingOutcome::failed(
                    format!("Failed to ping sitemap: {}", sitemap_url),
                    e.to_string(),
                )
            }
        }
    }

    /// Re-submits URLs that are already indexed, with the longer re-crawl
    /// delay between consecutive calls.
    pub async fn force_recrawl(&self, urls: &[String]) -> Vec<IndexingOutcome> {
        self.submit_paced(urls, NotificationType::Updated, self.delays.recrawl)
            .await
    }

    /// Pings the sitemap, then re-submits every published URL.
    pub async fn complete_reindex(&self, base_url: &str) -> ReindexReport {
        let sitemap_ping = self
            .ping_sitemap(&format!("{}/sitemap.xml", base_url))
            .await;

        let urls = site::all_urls(base_url);
        let url_submissions = self
            .submit_paced(&urls, NotificationType::Updated, self.delays.reindex)
            .await;

        let successful_submissions = url_submissions.iter().filter(|r| r.success).count();
        let summary = ReindexSummary {
            total_urls: urls.len(),
            successful_submissions,
            failed_submissions: urls.len() - successful_submissions,
        };
        info!(
            total = summary.total_urls,
            failed = summary.failed_submissions,
            "complete re-index finished"
        );

        ReindexReport {
            success: true,
            message: format!("Complete re-indexing triggered for {} URLs", urls.len()),
            data: ReindexData { sitemap_ping, summary, url_submissions },
        }
    }

    /// Pings the sitemap and re-submits the priority URLs only.
    pub async fn quick_update(&self, base_url: &str) -> QuickUpdateReport {
        let sitemap_ping = self
            .ping_sitemap(&format!("{}/sitemap.xml", base_url))
            .await;
        let url_submissions = self.force_recrawl(&site::priority_urls(base_url)).await;

        QuickUpdateReport {
            success: true,
            sitemap_ping,
            url_submissions,
            message: "Quick update completed - sitemap pinged and priority URLs submitted \
                      for re-crawling"
                .to_string(),
        }
    }

    async fn submit_paced(
        &self,
        urls: &[String],
        kind: NotificationType,
        delay: Duration,
    ) -> Vec<IndexingOutcome> {
        let mut results = Vec::with_capacity(urls.len());
        for (i, url) in urls.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(delay).await;
            }
            let outcome = self.submit_url(url, kind).await.tagged(url);
            results.push(outcome);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexing::error::{IndexingError, Result};
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::time::Instant;

    /// Records every call; fails for URLs in `fail_urls`.
    #[derive(Default)]
    struct RecordingApi {
        published: Mutex<Vec<(String, NotificationType)>>,
        pinged: Mutex<Vec<String>>,
        fail_urls: HashSet<String>,
        fail_pings: bool,
    }

    impl RecordingApi {
        fn failing_for(urls: &[&str]) -> Self {
            Self {
                fail_urls: urls.iter().map(|u| u.to_string()).collect(),
                ..Default::default()
            }
        }

        fn published_urls(&self) -> Vec<String> {
            self.published
                .lock()
                .unwrap()
                .iter()
                .map(|(u, _)| u.clone())
                .collect()
        }
    }

    #[async_trait]
    impl UrlNotificationApi for &RecordingApi {
        async fn publish(&self, url: &str, kind: NotificationType) -> Result<Value> {
            self.published.lock().unwrap().push((url.to_string(), kind));
            if self.fail_urls.contains(url) {
                Err(IndexingError::Endpoint { status: 403, body: "permission denied".into() })
            } else {
                Ok(json!({ "urlNotificationMetadata": { "url": url } }))
            }
        }

        async fn metadata(&self, url: &str) -> Result<Value> {
            if self.fail_urls.contains(url) {
                Err(IndexingError::Endpoint { status: 404, body: "not found".into() })
            } else {
                Ok(json!({ "url": url, "latestUpdate": { "type": "URL_UPDATED" } }))
            }
        }

        async fn ping_sitemap(&self, sitemap_url: &str) -> Result<()> {
            self.pinged.lock().unwrap().push(sitemap_url.to_string());
            if self.fail_pings {
                Err(IndexingError::Endpoint { status: 503, body: "unavailable".into() })
            } else {
                Ok(())
            }
        }
    }

    fn fast_delays() -> Delays {
        Delays {
            submit: Duration::from_millis(1),
            reindex: Duration::from_millis(1),
            recrawl: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn test_submit_url_success_carries_data_and_message() {
        let api = RecordingApi::default();
        let client = IndexingClient::with_delays(&api, fast_delays());

        let outcome = client
            .submit_url("https://example.dev/a", NotificationType::Updated)
            .await;
        assert!(outcome.success);
        assert_eq!(
            outcome.message,
            "Successfully submitted https://example.dev/a for indexing"
        );
        assert!(outcome.data.is_some());
        assert!(outcome.error.is_none());
    }

    #[tokio::test]
    async fn test_submit_url_failure_is_an_outcome_not_an_error() {
        let api = RecordingApi::failing_for(&["https://example.dev/bad"]);
        let client = IndexingClient::with_delays(&api, fast_delays());

        let outcome = client
            .submit_url("https://example.dev/bad", NotificationType::Updated)
            .await;
        assert!(!outcome.success);
        assert_eq!(
            outcome.message,
            "Failed to submit https://example.dev/bad for indexing"
        );
        assert!(outcome.error.as_deref().unwrap().contains("403"));
    }

    #[tokio::test]
    async fn test_submit_multiple_returns_one_outcome_per_url_in_order() {
        let api = RecordingApi::failing_for(&["https://example.dev/2"]);
        let client = IndexingClient::with_delays(&api, fast_delays());

        let urls: Vec<String> = (1..=3).map(|i| format!("https://example.dev/{}", i)).collect();
        let results = client.submit_multiple(&urls).await;

        assert_eq!(results.len(), 3);
        for (result, url) in results.iter().zip(&urls) {
            assert_eq!(result.url.as_deref(), Some(url.as_str()));
        }
        assert!(results[0].success);
        assert!(!results[1].success);
        assert!(results[2].success, "later URLs still submitted after a failure");
    }

    #[tokio::test]
    async fn test_batch_paces_between_consecutive_submissions() {
        let api = RecordingApi::default();
        let delays = Delays { submit: Duration::from_millis(25), ..fast_delays() };
        let client = IndexingClient::with_delays(&api, delays);

        let urls: Vec<String> = (0..3).map(|i| format!("https://example.dev/{}", i)).collect();
        let started = Instant::now();
        client.submit_multiple(&urls).await;

        // Two gaps between three submissions.
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_ping_sitemap_success_and_failure() {
        let ok_api = RecordingApi::default();
        let client = IndexingClient::with_delays(&ok_api, fast_delays());
        let outcome = client.ping_sitemap("https://example.dev/sitemap.xml").await;
        assert!(outcome.success);
        assert!(outcome.message.contains("sitemap"));

        let bad_api = RecordingApi { fail_pings: true, ..Default::default() };
        let client = IndexingClient::with_delays(&bad_api, fast_delays());
        let outcome = client.ping_sitemap("https://example.dev/sitemap.xml").await;
        assert!(!outcome.success);
        assert!(outcome.error.is_some());
    }

    #[tokio::test]
    async fn test_complete_reindex_counts_failures() {
        let api = RecordingApi::failing_for(&[
            "https://example.dev/#skills",
            "https://example.dev/apps/flightdeck",
        ]);
        let client = IndexingClient::with_delays(&api, fast_delays());

        let report = client.complete_reindex("https://example.dev").await;
        let expected_total = site::all_urls("https://example.dev").len();

        assert!(report.success);
        assert_eq!(report.data.summary.total_urls, expected_total);
        assert_eq!(report.data.summary.failed_submissions, 2);
        assert_eq!(
            report.data.summary.successful_submissions,
            expected_total - 2
        );
        assert_eq!(report.data.url_submissions.len(), expected_total);
        assert!(report.data.sitemap_ping.success);
    }

    #[tokio::test]
    async fn test_quick_update_pings_sitemap_and_resubmits_priority_urls() {
        let api = RecordingApi::default();
        let client = IndexingClient::with_delays(&api, fast_delays());

        let report = client.quick_update("https://example.dev").await;

        assert!(report.success);
        assert_eq!(
            *api.pinged.lock().unwrap(),
            vec!["https://example.dev/sitemap.xml".to_string()]
        );
        assert_eq!(api.published_urls(), site::priority_urls("https://example.dev"));
        assert_eq!(report.url_submissions.len(), 3);
    }

    #[tokio::test]
    async fn test_get_status_messages() {
        let api = RecordingApi::default();
        let client = IndexingClient::with_delays(&api, fast_delays());
        let outcome = client.get_status("https://example.dev/a").await;
        assert!(outcome.success);
        assert_eq!(
            outcome.message,
            "Successfully retrieved indexing status for https://example.dev/a"
        );

        let api = RecordingApi::failing_for(&["https://example.dev/a"]);
        let client = IndexingClient::with_delays(&api, fast_delays());
        let outcome = client.get_status("https://example.dev/a").await;
        assert!(!outcome.success);
        assert_eq!(
            outcome.message,
            "Failed to get indexing status for https://example.dev/a"
        );
    }

    #[test]
    fn test_outcome_serialization_skips_empty_fields() {
        let outcome = IndexingOutcome::succeeded("ok".into(), None);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, json!({ "success": true, "message": "ok" }));
    }
}
