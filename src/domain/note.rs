// src/domain/note.rs
use crate::domain::{DomainError, Model};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub fields: Vec<String>,
    pub tags: Vec<String>,
}

impl Note {
    /// Bind fields and tags to a model, rejecting a field-count mismatch.
    pub fn new(model: &Model, fields: Vec<String>, tags: Vec<String>) -> Result<Self, DomainError> {
        if fields.len() != model.fields.len() {
            return Err(DomainError::FieldCount {
                expected: model.fields.len(),
                actual: fields.len(),
            });
        }

        let tags = tags
            .iter()
            .map(|t| normalize_tag(t))
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Self { fields, tags })
    }

    pub fn front(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or_default()
    }
}

/// Anki tags are whitespace separated, so whitespace inside a tag becomes `_`.
pub fn normalize_tag(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("_")
}
