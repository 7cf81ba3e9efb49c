//! Utility modules for the portfolio shell.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_rating_stars, get_current_memory_mb, format_memory_mb};
