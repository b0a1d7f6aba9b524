use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // Match HTML img tags: <img src="path">
    static ref HTML_IMAGE_REGEX: Regex = Regex::new(r#"(<img[^>]*?\ssrc\s*=\s*)(["'])([^"']+)(["'])"#)
        .expect("Failed to compile HTML image regex");
}

/// Final path component of an image reference.
///
/// Media is shipped flat inside the package, so `res/diagram.png` and
/// `../a/b/diagram.png` both resolve to `diagram.png`.
pub fn base_filename(src: &str) -> &str {
    src.rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(src)
}

/// Rewrite the src of every `<img>` tag in raw HTML to its base filename
pub fn rewrite_html_image_sources(html: &str) -> String {
    HTML_IMAGE_REGEX
        .replace_all(html, |caps: &Captures| {
            format!(
                "{}{}{}{}",
                &caps[1],
                &caps[2],
                base_filename(&caps[3]),
                &caps[4]
            )
        })
        .into_owned()
}
