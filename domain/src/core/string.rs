//! String utilities for the domain layer.

const ELLIPSIS: &str = "...";

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Used to keep upstream response bodies readable in logs and error details.
/// `max_len` counts bytes, but the cut always lands on a char boundary.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let budget = max_len.saturating_sub(ELLIPSIS.len());
    let cut = s
        .char_indices()
        .map(|(idx, ch)| idx + ch.len_utf8())
        .take_while(|&end| end <= budget)
        .last()
        .unwrap_or(0);

    let mut out = String::with_capacity(cut + ELLIPSIS.len());
    out.push_str(&s[..cut]);
    out.push_str(ELLIPSIS);
    out
}
