//! Text helpers for width-constrained rendering

/// Truncate to at most `max_chars` characters, appending an ellipsis when
/// anything was cut. Operates on characters, not bytes, so multi-byte names
/// are safe to cut anywhere.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}
