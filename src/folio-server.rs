//! Portfolio web server binary.
//!
//! Serves the indexing API, the SEO documents, and the home-page shell. The
//! GUI admin panel and `folio-indexctl` both talk to this process over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use rfolio::indexing::{
    EnvTokenSource, GoogleIndexingApi, IndexingClient, ServiceAccountKey, StaticTokenSource,
    TokenSource, SERVICE_ACCOUNT_FILE, TOKEN_ENV_VAR,
};
use rfolio::server::{serve, ServerState};
use rfolio::site;

/// Server command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio-server")]
#[command(about = "Portfolio indexing API and SEO document server", version)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "FOLIO_ADDR", default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Canonical base URL used in sitemap, robots and re-index batches
    #[arg(long, env = "FOLIO_BASE_URL", default_value = site::BASE_URL)]
    base_url: String,

    /// Path to the Google service-account key file
    #[arg(long, env = "FOLIO_CREDENTIALS", default_value = SERVICE_ACCOUNT_FILE)]
    credentials: PathBuf,

    /// Fixed bearer token for the Google endpoints. When absent the token is
    /// read from GOOGLE_INDEXING_TOKEN on every request.
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    setup_tracing();

    let key = ServiceAccountKey::load(&args.credentials)
        .with_context(|| format!("loading credentials from {}", args.credentials.display()))?;

    let tokens: Box<dyn TokenSource> = match args.token {
        Some(token) => Box::new(StaticTokenSource::new(token)),
        None => {
            info!("no --token given, reading {} per request", TOKEN_ENV_VAR);
            Box::new(EnvTokenSource)
        }
    };

    let api = GoogleIndexingApi::new(key, tokens)?;
    info!(client_email = api.client_email(), "indexing collaborator ready");

    let state = Arc::new(ServerState {
        client: IndexingClient::new(api),
        base_url: args.base_url.clone(),
    });

    info!(base_url = %args.base_url, "starting folio-server");
    serve(args.addr, state).await
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rfolio=info,tower_http=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
