//! I/O modules for background network requests.

pub mod admin_requests;

// Re-export commonly used types
pub use admin_requests::{AdminAction, AdminSubmitter, RequestResult};
