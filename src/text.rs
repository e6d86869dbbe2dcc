//! Small text helpers shared by listing and formatting

const ELLIPSIS: &str = "...";

/// Cut `text` to at most `max` characters, ending in `...` when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut result: String = text.chars().take(keep).collect();
    result.push_str(ELLIPSIS);
    result
}

/// First non-empty line of a message, trimmed
pub fn first_line(message: &str) -> &str {
    message.trim().lines().next().unwrap_or("").trim()
}
