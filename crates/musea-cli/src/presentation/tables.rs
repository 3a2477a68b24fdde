//! Text layout helpers for CLI output.
//!
//! Widths are counted in characters, not bytes, so titles with accents and
//! CJK text are cut on character boundaries.

/// Truncates a string to a maximum length, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use musea_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Truncate then right-pad to exactly `width` characters.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let cut = truncate_string(s, width);
    let len = cut.chars().count();
    format!("{cut}{}", " ".repeat(width.saturating_sub(len)))
}

/// A horizontal separator line.
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format an optional value for display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), |v| v.to_string())
}
