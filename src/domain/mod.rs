//! Domain logic modules for the portfolio shell.
//!
//! This module contains core business logic:
//! - Allocation (sub-panel height distribution from live measurements)
//! - Search (catalog matching behind the search panel)

pub mod allocation;
pub mod search;
