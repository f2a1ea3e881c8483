/// Checkbox glyph for the given state
pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// "shown of total" text for the table title
pub fn match_summary(shown: usize, total: usize) -> String {
    format!("{} of {}", shown, total)
}
