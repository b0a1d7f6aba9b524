// src/application/mod.rs
pub mod deck_assembler;
pub mod deck_builder;
pub mod package_lister;

pub use deck_assembler::{SourceSections, TagRule};
pub use deck_builder::{BuildReport, DeckBuilder, DeckSettings, JsonRun, MarkdownRun};
pub use package_lister::PackageLister;
