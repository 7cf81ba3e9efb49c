//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from business logic:
//! - Icon and color mapping for file kinds
//! - Accent colors for home page sections

pub mod color_mapping;
