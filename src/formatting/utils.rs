/// Shortens `s` to at most `max_len` characters, ending in "..." when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

/// Left-aligns `s` in a column of `width` characters, truncating if needed.
/// `format!("{:<w$}")` pads by chars too, but never cuts.
pub fn pad(s: &str, width: usize) -> String {
    let cut = truncate(s, width);
    let len = cut.chars().count();
    format!("{}{}", cut, " ".repeat(width.saturating_sub(len)))
}
