//! Search-engine indexing integration.
//!
//! Layers, bottom to top: credential loading, the opaque URL-notification
//! collaborator (trait + HTTPS implementation), and the high-level client
//! whose batch operations pace themselves and never propagate per-URL
//! failures.

pub mod api;
pub mod client;
pub mod credentials;
pub mod error;

pub use api::{
    EnvTokenSource, GoogleIndexingApi, NotificationType, StaticTokenSource, TokenSource,
    UrlNotificationApi, TOKEN_ENV_VAR,
};
pub use client::{
    Delays, IndexingClient, IndexingOutcome, QuickUpdateReport, ReindexReport, ReindexSummary,
};
pub use credentials::{ServiceAccountKey, INDEXING_SCOPE, SERVICE_ACCOUNT_FILE};
pub use error::{IndexingError, Result};
