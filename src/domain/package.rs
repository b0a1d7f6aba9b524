// src/domain/package.rs
use crate::domain::{Deck, DomainError, Model};
use crate::util::text::image_sources;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Deck, model and the media files that travel with them.
#[derive(Debug, Clone)]
pub struct Package {
    pub deck: Deck,
    pub model: Model,
    pub media_files: Vec<PathBuf>,
}

impl Package {
    pub fn new(deck: Deck, model: Model, media_files: Vec<PathBuf>) -> Self {
        Self {
            deck,
            model,
            media_files,
        }
    }

    /// Every local image a note refers to must be shipped and present on disk.
    ///
    /// Sources are compared percent-decoded. Remote and inline images are not
    /// part of the package and are left alone.
    pub fn verify_media(&self) -> Result<(), DomainError> {
        let shipped: HashSet<String> = self
            .media_files
            .iter()
            .filter(|p| p.is_file())
            .filter_map(|p| file_name(p))
            .collect();

        for note in self.deck.notes() {
            for field in &note.fields {
                if let Some(missing) = image_sources(field)
                    .iter()
                    .filter(|src| is_local(src))
                    .map(|src| decode_source(src))
                    .find(|name| !shipped.contains(name))
                {
                    return Err(DomainError::MissingMedia {
                        file: missing,
                        note: note.front().to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

fn is_local(src: &str) -> bool {
    !(src.contains("://") || src.starts_with("//") || src.starts_with("data:"))
}

fn decode_source(src: &str) -> String {
    urlencoding::decode(src)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| src.to_string())
}
