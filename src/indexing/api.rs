//! The URL notification collaborator.
//!
//! Publishing a URL is an opaque network interaction: hand the collaborator a
//! URL and a notification type, get structured JSON or an error back. The
//! production implementation talks to Google's Indexing API over HTTPS; tests
//! substitute an in-memory double.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use super::credentials::ServiceAccountKey;
use super::error::{IndexingError, Result};

pub const PUBLISH_ENDPOINT: &str = "https://indexing.googleapis.com/v3/urlNotifications:publish";
pub const METADATA_ENDPOINT: &str = "https://indexing.googleapis.com/v3/urlNotifications/metadata";
pub const SITEMAP_PING_ENDPOINT: &str = "https://www.google.com/ping";

/// Environment variable holding the bearer token for the Google endpoints.
pub const TOKEN_ENV_VAR: &str = "GOOGLE_INDEXING_TOKEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    Updated,
    Deleted,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Updated => "URL_UPDATED",
            NotificationType::Deleted => "URL_DELETED",
        }
    }
}

/// Everything the indexing client needs from the outside world.
#[async_trait]
pub trait UrlNotificationApi: Send + Sync {
    /// Publishes a URL notification, returning the endpoint's JSON response.
    async fn publish(&self, url: &str, kind: NotificationType) -> Result<Value>;

    /// Fetches notification metadata for a URL.
    async fn metadata(&self, url: &str) -> Result<Value>;

    /// Pings the sitemap endpoint. Success is decided by HTTP status alone.
    async fn ping_sitemap(&self, sitemap_url: &str) -> Result<()>;
}

/// Supplies the bearer token for the authenticated endpoints. Token minting
/// happens outside this crate (workload identity, or
/// `gcloud auth print-access-token` impersonating the service account); the
/// process only reads the result.
pub trait TokenSource: Send + Sync {
    fn access_token(&self) -> Result<String>;
}

/// Reads the token from `GOOGLE_INDEXING_TOKEN` on every request, so an
/// operator can rotate it without restarting the server.
pub struct EnvTokenSource;

impl TokenSource for EnvTokenSource {
    fn access_token(&self) -> Result<String> {
        std::env::var(TOKEN_ENV_VAR).map_err(|_| IndexingError::MissingToken {
            message: format!("{} is not set", TOKEN_ENV_VAR),
        })
    }
}

/// A fixed token, handed over on the command line.
pub struct StaticTokenSource(String);

impl StaticTokenSource {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenSource for StaticTokenSource {
    fn access_token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Production collaborator: Google's Indexing API v3.
pub struct GoogleIndexingApi {
    http: reqwest::Client,
    key: ServiceAccountKey,
    tokens: Box<dyn TokenSource>,
}

impl GoogleIndexingApi {
    pub fn new(key: ServiceAccountKey, tokens: Box<dyn TokenSource>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        debug!(client_email = %key.client_email, "indexing collaborator ready");
        Ok(Self { http, key, tokens })
    }

    /// The service-account identity requests are made as.
    pub fn client_email(&self) -> &str {
        &self.key.client_email
    }
}

#[async_trait]
impl UrlNotificationApi for GoogleIndexingApi {
    async fn publish(&self, url: &str, kind: NotificationType) -> Result<Value> {
        let token = self.tokens.access_token()?;
        let response = self
            .http
            .post(PUBLISH_ENDPOINT)
            .bearer_auth(token)
            .json(&json!({ "url": url, "type": kind.as_str() }))
            .send()
            .await?;
        read_json(response).await
    }

    async fn metadata(&self, url: &str) -> Result<Value> {
        let token = self.tokens.access_token()?;
        let response = self
            .http
            .get(METADATA_ENDPOINT)
            .bearer_auth(token)
            .query(&[("url", url)])
            .send()
            .await?;
        read_json(response).await
    }

    async fn ping_sitemap(&self, sitemap_url: &str) -> Result<()> {
        let response = self
            .http
            .get(SITEMAP_PING_ENDPOINT)
            .query(&[("sitemap", sitemap_url)])
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(IndexingError::Endpoint {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        Err(IndexingError::Endpoint {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_wire_names() {
        assert_eq!(NotificationType::Updated.as_str(), "URL_UPDATED");
        assert_eq!(NotificationType::Deleted.as_str(), "URL_DELETED");
    }

    #[test]
    fn test_env_token_source_reports_missing_var() {
        std::env::remove_var(TOKEN_ENV_VAR);
        match EnvTokenSource.access_token() {
            Err(IndexingError::MissingToken { message }) => {
                assert!(message.contains(TOKEN_ENV_VAR));
            }
            other => panic!("expected MissingToken, got {:?}", other),
        }
    }

    #[test]
    fn test_static_token_source_returns_token() {
        let source = StaticTokenSource::new("ya29.test");
        assert_eq!(source.access_token().unwrap(), "ya29.test");
    }
}
