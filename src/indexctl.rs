//! Indexing operations CLI.
//!
//! `urls` regenerates the URL catalog files; `quick` and `complete` drive a
//! running server's indexing endpoint and pretty-print what it reports.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::Value;

use rfolio::site;

const API_PATH: &str = "/api/indexing";
const LOCAL_SERVER: &str = "http://localhost:3000";

#[derive(Debug, Parser)]
#[command(name = "folio-indexctl")]
#[command(about = "Search-engine indexing helper for the portfolio site", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the URL catalog and write portfolio-urls.txt / portfolio-urls.json.
    Urls(UrlsArgs),

    /// Ping the sitemap and resubmit the priority URLs.
    Quick(TargetArgs),

    /// Resubmit every published URL.
    Complete(TargetArgs),
}

#[derive(Debug, clap::Args)]
struct UrlsArgs {
    /// Directory the catalog files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Debug, clap::Args)]
struct TargetArgs {
    /// Target a local development server instead of production
    #[arg(long)]
    local: bool,
}

impl TargetArgs {
    fn server(&self) -> &str {
        if self.local {
            LOCAL_SERVER
        } else {
            site::BASE_URL
        }
    }
}

fn main() -> anyhow::Result<()> {
    setup_tracing();
    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Urls(args) => generate_urls(&args),
        Commands::Quick(args) => quick_update(&args),
        Commands::Complete(args) => complete_reindex(&args),
    }
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rfolio=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn generate_urls(args: &UrlsArgs) -> anyhow::Result<()> {
    let urls = site::all_urls(site::BASE_URL);

    println!("Generated URLs:");
    println!("==================");
    for (index, url) in urls.iter().enumerate() {
        println!("{}. {}", index + 1, url);
    }
    println!();
    println!("Total URLs: {}", urls.len());

    let text_path = args.out_dir.join("portfolio-urls.txt");
    std::fs::write(&text_path, urls.join("\n"))
        .with_context(|| format!("writing {}", text_path.display()))?;
    println!("URLs saved to: {}", text_path.display());

    let json_path = args.out_dir.join("portfolio-urls.json");
    std::fs::write(&json_path, serde_json::to_string_pretty(&urls)?)
        .with_context(|| format!("writing {}", json_path.display()))?;
    println!("URLs also saved as JSON to: {}", json_path.display());

    Ok(())
}

fn quick_update(args: &TargetArgs) -> anyhow::Result<()> {
    println!("Starting quick indexing update...");
    println!("Targeting: {}", args.server());
    println!();

    let report = post_action(args.server(), "quick-update")?;

    println!("Quick update completed.");
    println!();
    println!("Results:");
    let ping = &report["sitemapPing"];
    let ping_mark = if ping["success"].as_bool().unwrap_or(false) {
        "✔"
    } else {
        "✘"
    };
    println!("  Sitemap ping: {}", ping_mark);
    if let Some(message) = ping["message"].as_str() {
        println!("    {}", message);
    }

    let submissions = submissions_of(&report["urlSubmissions"]);
    println!("  URL submissions: {} URLs processed", submissions.len());
    print_submissions(&submissions, "    ");

    if let Some(message) = report["message"].as_str() {
        println!();
        println!("{}", message);
    }
    Ok(())
}

fn complete_reindex(args: &TargetArgs) -> anyhow::Result<()> {
    println!("Starting complete re-indexing...");
    println!("Targeting: {}", args.server());
    println!();

    let report = post_action(args.server(), "complete-reindex")?;

    let summary = &report["data"]["summary"];
    println!("Complete re-indexing finished.");
    println!();
    println!("Summary:");
    println!("  Total URLs: {}", summary["totalUrls"]);
    println!("  Successful: {}", summary["successfulSubmissions"]);
    println!("  Failed:     {}", summary["failedSubmissions"]);

    println!();
    println!("Detailed results:");
    print_submissions(&submissions_of(&report["data"]["urlSubmissions"]), "  ");
    Ok(())
}

/// POSTs one action to a server's indexing endpoint. Non-200 responses and
/// `success: false` reports both come back as errors so the process exits
/// non-zero.
fn post_action(server: &str, action: &str) -> anyhow::Result<Value> {
    let endpoint = format!("{}{}", server, API_PATH);
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(300))
        .build()?;

    let response = client
        .post(&endpoint)
        .json(&serde_json::json!({ "action": action, "baseUrl": site::BASE_URL }))
        .send()
        .with_context(|| format!("reaching {}", endpoint))?;

    let status = response.status();
    let body: Value = response
        .json()
        .with_context(|| format!("reading {} response", endpoint))?;

    if !status.is_success() {
        bail!(
            "{} failed with {}: {}",
            action,
            status,
            body["error"].as_str().unwrap_or("unknown error")
        );
    }
    if !body["success"].as_bool().unwrap_or(false) {
        bail!(
            "{} reported failure: {}",
            action,
            body["error"]
                .as_str()
                .or_else(|| body["message"].as_str())
                .unwrap_or("unknown error")
        );
    }
    Ok(body)
}

fn submissions_of(value: &Value) -> Vec<&Value> {
    value
        .as_array()
        .map(|entries| entries.iter().collect())
        .unwrap_or_default()
}

fn print_submissions(submissions: &[&Value], indent: &str) {
    for (index, result) in submissions.iter().enumerate() {
        let mark = if result["success"].as_bool().unwrap_or(false) {
            "✔"
        } else {
            "✘"
        };
        println!(
            "{}{}. {} {}",
            indent,
            index + 1,
            mark,
            result["url"].as_str().unwrap_or("?")
        );
    }
}
