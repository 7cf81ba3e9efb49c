//! Coordination between the debug panel and the indexing server client.
//!
//! Responsibilities:
//! - Kick off background indexing requests on behalf of the UI
//! - Poll for request completion each frame
//! - Translate request outcomes into admin log entries

use crate::app::AppState;
use crate::io::{AdminAction, AdminSubmitter, RequestResult};
use crate::state::AdminLogEntry;

/// Stateless coordinator for indexing requests issued from the debug panel.
pub struct AdminCoordinator;

impl AdminCoordinator {
    /// Starts a background request against the configured indexing server.
    pub fn start_request(
        state: &mut AppState,
        submitter: &mut AdminSubmitter,
        action: AdminAction,
        ctx: &egui::Context,
    ) {
        if state.admin.is_busy() {
            return;
        }
        state.admin.begin_request();
        submitter.start_request(action, state.admin.server_url(), ctx);
    }

    /// Checks whether a background request has finished and, if so, folds
    /// its outcome into the admin log. Returns true when the log changed.
    pub fn check_request_completion(state: &mut AppState, submitter: &mut AdminSubmitter) -> bool {
        match submitter.check_completion() {
            RequestResult::Success { entries, .. } => {
                state.admin.finish_request(entries);
                true
            }
            RequestResult::Error { action, message } => {
                state.admin.finish_request(vec![AdminLogEntry::err(format!(
                    "{} failed: {}",
                    action.name(),
                    message
                ))]);
                true
            }
            RequestResult::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_completion_leaves_the_log_alone() {
        let mut state = AppState::new();
        let mut submitter = AdminSubmitter::new();

        let changed = AdminCoordinator::check_request_completion(&mut state, &mut submitter);

        assert!(!changed);
        assert!(state.admin.log().is_empty());
    }
}
