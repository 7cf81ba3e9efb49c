//! Text formatting utilities for the portfolio shell.
//!
//! This module provides helper functions for formatting values in a human-readable way.

use sysinfo::{System, RefreshKind, ProcessRefreshKind, Pid};

/// Renders an extension rating as a five-star string, rounding to the
/// nearest whole star.
///
/// # Examples
/// ```
/// assert_eq!(format_rating_stars(5.0), "★★★★★");
/// assert_eq!(format_rating_stars(4.3), "★★★★☆");
/// ```
pub fn format_rating_stars(rating: f32) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    let mut result = String::new();
    for i in 0..5 {
        result.push(if i < filled { '★' } else { '☆' });
    }
    result
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
///
/// # Examples
/// ```
/// let memory = get_current_memory_mb();
/// assert!(memory >= 0.0);
/// ```
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory())
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
///
/// # Arguments
/// * `memory_mb` - Memory usage in megabytes
///
/// # Examples
/// ```
/// assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
/// assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
/// ```
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_stars_round_to_the_nearest_star() {
        assert_eq!(format_rating_stars(4.8), "★★★★★");
        assert_eq!(format_rating_stars(4.2), "★★★★☆");
        assert_eq!(format_rating_stars(0.0), "☆☆☆☆☆");
    }
}
