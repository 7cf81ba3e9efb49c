//! Indexing administration state.
//!
//! Backs the "Run and Debug" panel: the target server, the URL under
//! submission, and the scrolling result log. Requests themselves run on a
//! background thread; this component only records what came back.

use rfolio::BASE_URL;

/// Server the admin panel talks to unless overridden in the UI.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// One line of the admin result log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLogEntry {
    pub success: bool,
    pub text: String,
}

impl AdminLogEntry {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
        }
    }

    pub fn err(text: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
        }
    }
}

/// State of the indexing administration panel.
///
/// Responsibilities:
/// - Hold the server and URL text buffers
/// - Track whether a request is in flight
/// - Accumulate the result log, newest entries last
#[derive(Debug, Clone)]
pub struct AdminState {
    server_url: String,
    url_input: String,
    log: Vec<AdminLogEntry>,
    requests_in_flight: usize,
}

impl Default for AdminState {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminState {
    pub fn new() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            url_input: BASE_URL.to_string(),
            log: Vec::new(),
            requests_in_flight: 0,
        }
    }

    // ===== Queries =====

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn log(&self) -> &[AdminLogEntry] {
        &self.log
    }

    pub fn is_busy(&self) -> bool {
        self.requests_in_flight > 0
    }

    // ===== Mutations =====

    pub fn server_url_mut(&mut self) -> &mut String {
        &mut self.server_url
    }

    pub fn url_input_mut(&mut self) -> &mut String {
        &mut self.url_input
    }

    /// Records that a request was handed to the background submitter.
    pub fn begin_request(&mut self) {
        self.requests_in_flight += 1;
    }

    /// Records that a request completed and appends its result lines.
    pub fn finish_request(&mut self, entries: Vec<AdminLogEntry>) {
        self.requests_in_flight = self.requests_in_flight.saturating_sub(1);
        self.log.extend(entries);
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_tracks_outstanding_requests() {
        let mut admin = AdminState::new();
        assert!(!admin.is_busy());

        admin.begin_request();
        admin.begin_request();
        assert!(admin.is_busy());

        admin.finish_request(vec![AdminLogEntry::ok("first")]);
        assert!(admin.is_busy());
        admin.finish_request(vec![AdminLogEntry::err("second")]);
        assert!(!admin.is_busy());

        assert_eq!(admin.log().len(), 2);
        assert!(admin.log()[0].success);
        assert!(!admin.log()[1].success);
    }

    #[test]
    fn test_clear_log_keeps_inputs() {
        let mut admin = AdminState::new();
        admin.url_input_mut().push_str("/#about-me");
        admin.finish_request(vec![AdminLogEntry::ok("done")]);

        admin.clear_log();
        assert!(admin.log().is_empty());
        assert!(admin.url_input().ends_with("/#about-me"));
    }
}
