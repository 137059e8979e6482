//! Compact output rendering helpers for CLI surfaces.

use crate::core::error::Outcome;
use colored::Colorize;

/// Collapse newlines/extra whitespace and bound length for terminal display.
pub fn compact_line(input: &str, max_chars: usize) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// Render a bulleted list, or `(none)` when empty.
pub fn bullet_list(items: &[&str]) -> String {
    if items.is_empty() {
        return "  (none)".to_string();
    }
    items
        .iter()
        .map(|i| format!("  - {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line success/error rendering of an outcome message.
pub fn outcome_line(outcome: &Outcome) -> String {
    render_status(outcome.success, &outcome.message)
}

pub fn render_status(success: bool, message: &str) -> String {
    if success {
        format!("{} {}", "✓".green().bold(), message)
    } else {
        format!("{} {}", "✗".red().bold(), message)
    }
}
