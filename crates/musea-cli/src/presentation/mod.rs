//! Shared CLI presentation utilities.
//!
//! Format-only: no domain transforms. Everything here turns core types
//! into text.

pub mod cards;
pub mod tables;

// Re-export commonly used items
pub use cards::{render_detail, render_page};
pub use tables::{fit_to_width, format_optional, separator, truncate_string};
