// src/domain/section.rs

/// A contiguous span of source content that becomes exactly one note.
///
/// `title` is plain text, `body` is HTML. `tag` is only set when the source
/// itself carries the tag context (a level-1 Markdown heading).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub tag: Option<String>,
    pub title: String,
    pub body: String,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            tag: None,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn tagged(tag: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            title: title.into(),
            body: body.into(),
        }
    }
}
