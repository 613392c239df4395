//! Utility functions for common operations.
//!
//! Text processing helpers shared by the table and profile renderers:
//! Unicode-aware width measurement and truncation, whitespace flattening
//! for single-line table cells, and initials extraction for the profile
//! avatar.

mod text;

pub use text::{display_width, flatten_whitespace, initials, truncate_to_width};

/// Maximum allowed search input length (UI layer validation).
pub const MAX_SEARCH_LENGTH: usize = 256;
