//! Verse pagination over stored lyrics.

/// Blank line separating two verses.
pub const VERSE_DELIMITER: &str = "\n\n";

/// Splits lyrics into verses. A single trailing delimiter does not start an
/// extra empty verse, and empty lyrics have no verses at all.
pub fn split_verses(full_text: &str) -> Vec<&str> {
    let body = full_text
        .strip_suffix(VERSE_DELIMITER)
        .unwrap_or(full_text);
    if body.is_empty() {
        return Vec::new();
    }
    body.split(VERSE_DELIMITER).collect()
}

/// Returns the verses of page `page` (1-based) with `limit` verses per page.
///
/// A page past the last verse is empty, a partial last page is clamped.
/// `page` or `limit` of zero yields an empty page.
pub fn paginate_verses(full_text: &str, page: u32, limit: u32) -> Vec<String> {
    if page == 0 || limit == 0 {
        return Vec::new();
    }
    let verses = split_verses(full_text);
    let start = (page as usize - 1).saturating_mul(limit as usize);
    if start >= verses.len() {
        return Vec::new();
    }
    let end = start.saturating_add(limit as usize).min(verses.len());
    verses[start..end].iter().map(|v| v.to_string()).collect()
}
