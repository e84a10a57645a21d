//! Report formatting utilities for terminal output
//!
//! Shared helpers for the calculation, projection and record reports.

/// Width of report banners
pub const REPORT_WIDTH: usize = 50;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 0.1 && pct != 0.0 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Format an optional percentage, "N/A" when there is none
pub fn format_optional_percentage(pct: Option<f64>) -> String {
    pct.map(format_percentage).unwrap_or_else(|| "N/A".to_string())
}

/// Format an hourly rate ("$22.80/hr")
pub fn format_rate(symbol: &str, rate: f64) -> String {
    if rate < 0.0 {
        format!("-{}{:.2}/hr", symbol, rate.abs())
    } else {
        format!("{}{:.2}/hr", symbol, rate)
    }
}

/// Format a section banner: rule, title, rule
pub fn section(title: &str) -> String {
    let rule = double_separator(REPORT_WIDTH);
    format!("{}\n{}\n{}\n", rule, title, rule)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
