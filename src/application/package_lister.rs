// src/application/package_lister.rs
use crate::infrastructure::apkg;
use crate::util::text::extract_first_line;
use anyhow::Result;
use std::path::Path;

/// One row of `ankideck list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedNote {
    pub id: i64,
    pub front: String,
    pub tags: Vec<String>,
}

pub struct PackageLister;

impl PackageLister {
    /// List the notes of a package file, or only those whose front field
    /// contains `search_query` (case-insensitive)
    pub fn list_notes(path: &Path, search_query: Option<&str>) -> Result<Vec<ListedNote>> {
        let contents = apkg::read_package(path)?;
        let query = search_query.map(str::to_lowercase);

        Ok(contents
            .notes
            .into_iter()
            .map(|note| ListedNote {
                id: note.id,
                front: extract_first_line(note.fields.first().map(String::as_str).unwrap_or_default()),
                tags: note.tags,
            })
            .filter(|note| match &query {
                Some(q) => note.front.to_lowercase().contains(q),
                None => true,
            })
            .collect())
    }
}
