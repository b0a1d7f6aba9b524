// src/application/deck_assembler.rs
use crate::domain::{Deck, DomainError, Model, Note, Section};
use tracing::debug;

/// How each note's tag is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRule {
    /// The same tag on every note
    Constant(String),
    /// The stem of the source file name
    SourceName,
    /// The section's own tag (enclosing `#` heading), else the source name
    SectionTag,
}

/// Sections extracted from one source document
#[derive(Debug, Clone)]
pub struct SourceSections {
    pub source_name: String,
    pub sections: Vec<Section>,
}

impl SourceSections {
    pub fn new(source_name: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            source_name: source_name.into(),
            sections,
        }
    }
}

/// Append one note per section to `deck`, in source order then section order.
///
/// Returns the number of notes added.
pub fn assemble(
    deck: &mut Deck,
    model: &Model,
    sources: &[SourceSections],
    rule: &TagRule,
) -> Result<usize, DomainError> {
    let mut added = 0;
    for source in sources {
        for section in &source.sections {
            let tag = match rule {
                TagRule::Constant(tag) => tag.clone(),
                TagRule::SourceName => source.source_name.clone(),
                TagRule::SectionTag => section
                    .tag
                    .clone()
                    .unwrap_or_else(|| source.source_name.clone()),
            };

            let note = Note::new(
                model,
                vec![section.title.clone(), section.body.clone()],
                vec![tag],
            )?;
            deck.add_note(note);
            added += 1;
        }
        debug!(source = %source.source_name, notes = source.sections.len(), "Added notes");
    }
    Ok(added)
}
