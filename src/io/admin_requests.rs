//! Background indexing requests for the admin panel.
//!
//! This module issues HTTP requests against the portfolio server from a
//! background thread, keeping the GUI responsive while batch submissions
//! (which sleep between URLs server-side) run to completion.

use eframe::egui;
use serde_json::{json, Value};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::state::AdminLogEntry;

/// Batch actions can take tens of seconds with server-side pacing.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Shared flag describing whether a request is in flight.
pub struct RequestState {
    pub in_progress: bool,
}

impl RequestState {
    pub fn new() -> Self {
        Self { in_progress: false }
    }
}

impl Default for RequestState {
    fn default() -> Self {
        Self::new()
    }
}

/// An administrative request the panel can issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    /// Submit one URL for indexing
    Submit { url: String },
    /// Look up indexing status for one URL
    Status { url: String },
    /// Ping the sitemap and re-crawl the priority URLs
    QuickUpdate,
    /// Ping the sitemap and resubmit the whole catalog
    CompleteReindex,
}

impl AdminAction {
    /// Wire name of the action, as the server expects it.
    pub fn name(&self) -> &'static str {
        match self {
            AdminAction::Submit { .. } => "submit",
            AdminAction::Status { .. } => "status",
            AdminAction::QuickUpdate => "quick-update",
            AdminAction::CompleteReindex => "complete-reindex",
        }
    }
}

/// Result of a completed admin request.
pub enum RequestResult {
    /// The server answered; entries are ready for the result log
    Success {
        action: AdminAction,
        entries: Vec<AdminLogEntry>,
    },
    /// The request never produced a response body
    Error {
        action: AdminAction,
        message: String,
    },
    /// No request in flight, or the response has not arrived yet
    None,
}

/// Manages background admin requests against the portfolio server.
///
/// This struct coordinates a background request thread with the main GUI
/// thread. The panel disables its buttons while a request is in flight, so
/// at most one request runs at a time.
pub struct AdminSubmitter {
    /// Shared request state flag
    request_state: Arc<Mutex<RequestState>>,

    /// Channel receiver for the response body
    response_receiver: Option<Receiver<Result<Value, String>>>,

    /// Action currently in flight
    pending_action: Option<AdminAction>,
}

impl AdminSubmitter {
    /// Creates a submitter with no active request.
    pub fn new() -> Self {
        Self {
            request_state: Arc::new(Mutex::new(RequestState::new())),
            response_receiver: None,
            pending_action: None,
        }
    }

    /// Checks if a request is currently in flight.
    pub fn is_busy(&self) -> bool {
        let state = self.request_state.lock().unwrap();
        state.in_progress
    }

    /// Starts an admin request asynchronously against `server_url`.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `action` - The admin action to issue
    /// * `server_url` - Base URL of the portfolio server
    /// * `ctx` - egui context for requesting a repaint when the response lands
    pub fn start_request(&mut self, action: AdminAction, server_url: &str, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.response_receiver = Some(receiver);

        {
            let mut state = self.request_state.lock().unwrap();
            state.in_progress = true;
        }

        self.pending_action = Some(action.clone());

        let request_state = Arc::clone(&self.request_state);
        let ctx_handle = ctx.clone();
        let endpoint = format!("{}/api/indexing", server_url.trim_end_matches('/'));

        thread::spawn(move || {
            let result = issue_request(&action, &endpoint);

            if let Err(error) = &result {
                tracing::warn!(action = action.name(), %error, "admin request failed");
            }

            let _ = sender.send(result);

            {
                let mut state = request_state.lock().unwrap();
                state.in_progress = false;
            }

            ctx_handle.request_repaint();
        });
    }

    /// Checks if the background request has completed and returns the result
    /// if available.
    ///
    /// This should be called once per frame in the update loop.
    pub fn check_completion(&mut self) -> RequestResult {
        if let Some(receiver) = &self.response_receiver {
            if let Ok(result) = receiver.try_recv() {
                let action = self
                    .pending_action
                    .take()
                    .unwrap_or(AdminAction::QuickUpdate);

                let request_result = match result {
                    Ok(body) => RequestResult::Success {
                        entries: entries_from_response(&action, &body),
                        action,
                    },
                    Err(message) => RequestResult::Error { action, message },
                };

                self.response_receiver = None;

                return request_result;
            }
        }

        RequestResult::None
    }
}

impl Default for AdminSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Issues the blocking HTTP request for `action`. Runs on the background
/// thread.
fn issue_request(action: &AdminAction, endpoint: &str) -> Result<Value, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| e.to_string())?;

    let response = match action {
        AdminAction::Submit { url } => client
            .post(endpoint)
            .json(&json!({ "action": "submit", "url": url }))
            .send(),
        AdminAction::Status { url } => client.get(endpoint).query(&[("url", url)]).send(),
        AdminAction::QuickUpdate => client
            .post(endpoint)
            .json(&json!({ "action": "quick-update" }))
            .send(),
        AdminAction::CompleteReindex => client
            .post(endpoint)
            .json(&json!({ "action": "complete-reindex" }))
            .send(),
    };

    response
        .and_then(|r| r.json::<Value>())
        .map_err(|e| e.to_string())
}

/// Turns a server response body into result-log lines.
fn entries_from_response(action: &AdminAction, body: &Value) -> Vec<AdminLogEntry> {
    // 400/500 bodies carry an "error" field instead of "success".
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        let text = match body.get("message").and_then(Value::as_str) {
            Some(message) => format!("{}: {}", error, message),
            None => error.to_string(),
        };
        return vec![AdminLogEntry::err(text)];
    }

    let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("(no message)")
        .to_string();

    let mut entries = vec![AdminLogEntry {
        success,
        text: message,
    }];

    match action {
        AdminAction::QuickUpdate => {
            if let Some(ping) = body.get("sitemapPing") {
                entries.push(outcome_entry(ping));
            }
            if let Some(submissions) = body.get("urlSubmissions").and_then(Value::as_array) {
                entries.extend(submissions.iter().map(outcome_entry));
            }
        }
        AdminAction::CompleteReindex => {
            if let Some(summary) = body.pointer("/data/summary") {
                let total = summary.get("totalUrls").and_then(Value::as_u64).unwrap_or(0);
                let ok = summary
                    .get("successfulSubmissions")
                    .and_then(Value::as_u64)
                    .unwrap_or(0);
                let failed = summary
                    .get("failedSubmissions")
                    .and_then(Value::as_u64)
                    .unwrap_or(0);
                entries.push(AdminLogEntry {
                    success: failed == 0,
                    text: format!("{} URLs: {} submitted, {} failed", total, ok, failed),
                });
            }
            if let Some(submissions) = body.pointer("/data/urlSubmissions").and_then(Value::as_array)
            {
                // Full batches are long; only surface the failures.
                entries.extend(
                    submissions
                        .iter()
                        .filter(|s| !s.get("success").and_then(Value::as_bool).unwrap_or(false))
                        .map(outcome_entry),
                );
            }
        }
        AdminAction::Submit { .. } | AdminAction::Status { .. } => {}
    }

    entries
}

fn outcome_entry(outcome: &Value) -> AdminLogEntry {
    AdminLogEntry {
        success: outcome
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        text: outcome
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("(no message)")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitter_starts_idle() {
        let mut submitter = AdminSubmitter::new();
        assert!(!submitter.is_busy());
        assert!(matches!(submitter.check_completion(), RequestResult::None));
    }

    #[test]
    fn test_error_bodies_become_one_failed_entry() {
        let body = json!({ "error": "URL is required for submit action" });
        let entries = entries_from_response(&AdminAction::Submit { url: String::new() }, &body);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].success);
        assert_eq!(entries[0].text, "URL is required for submit action");
    }

    #[test]
    fn test_submit_response_becomes_its_message() {
        let body = json!({
            "success": true,
            "message": "Successfully submitted https://adrianvega.dev for indexing",
        });
        let entries = entries_from_response(
            &AdminAction::Submit {
                url: "https://adrianvega.dev".to_string(),
            },
            &body,
        );
        assert_eq!(entries.len(), 1);
        assert!(entries[0].success);
        assert!(entries[0].text.starts_with("Successfully submitted"));
    }

    #[test]
    fn test_reindex_response_surfaces_summary_and_failures() {
        let body = json!({
            "success": true,
            "message": "Complete re-indexing triggered for 12 URLs",
            "data": {
                "summary": {
                    "totalUrls": 12,
                    "successfulSubmissions": 11,
                    "failedSubmissions": 1,
                },
                "urlSubmissions": [
                    { "success": true, "message": "Successfully submitted https://adrianvega.dev for indexing" },
                    { "success": false, "message": "Failed to submit https://adrianvega.dev/apps/flightdeck for indexing" },
                ],
            },
        });
        let entries = entries_from_response(&AdminAction::CompleteReindex, &body);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].text, "12 URLs: 11 submitted, 1 failed");
        assert!(!entries[1].success);
        assert!(entries[2].text.contains("flightdeck"));
    }

    #[test]
    fn test_quick_update_lists_ping_and_submissions() {
        let body = json!({
            "success": true,
            "message": "Quick update completed - sitemap pinged and priority URLs submitted for re-crawling",
            "sitemapPing": { "success": true, "message": "Successfully pinged sitemap: https://adrianvega.dev/sitemap.xml" },
            "urlSubmissions": [
                { "success": true, "message": "Successfully submitted https://adrianvega.dev for indexing" },
            ],
        });
        let entries = entries_from_response(&AdminAction::QuickUpdate, &body);
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.success));
    }
}
