// src/util/text.rs
use html_escape::decode_html_entities;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BLOCK_TAG_REGEX: Regex =
        Regex::new(r"</?(p|div|br|li|h[1-6])[^>]*>").expect("Failed to compile block tag regex");
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]+>").expect("Failed to compile tag regex");
    static ref IMG_SRC_REGEX: Regex = Regex::new(r#"<img[^>]*?\ssrc\s*=\s*["']([^"']+)["']"#)
        .expect("Failed to compile img src regex");
}

/// Plain text of an HTML fragment.
///
/// This function:
/// 1. Removes all HTML tags
/// 2. Decodes HTML entities (e.g., &amp; → &)
/// 3. Trims whitespace
///
/// # Examples
///
/// ```
/// use ankideck::util::text::strip_html;
///
/// assert_eq!(strip_html("<p>Fish &amp; Chips</p>"), "Fish & Chips");
/// ```
pub fn strip_html(html: &str) -> String {
    let no_tags = TAG_REGEX.replace_all(html, "");
    decode_html_entities(&no_tags).trim().to_string()
}

/// Extract the first line of plain text from HTML content.
///
/// Block-level tags count as line breaks.
///
/// # Examples
///
/// ```
/// use ankideck::util::text::extract_first_line;
///
/// let html = "<p>What is a Tree?</p><p>Second line</p>";
/// assert_eq!(extract_first_line(html), "What is a Tree?");
/// ```
pub fn extract_first_line(html: &str) -> String {
    let with_newlines = BLOCK_TAG_REGEX.replace_all(html, "\n");
    let no_tags = TAG_REGEX.replace_all(&with_newlines, "");
    let decoded = decode_html_entities(&no_tags);

    decoded
        .lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Source attributes of all `<img>` tags, in document order.
pub fn image_sources(html: &str) -> Vec<String> {
    IMG_SRC_REGEX
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
