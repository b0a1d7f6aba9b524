// src/domain/mod.rs
pub mod deck;
pub mod error;
pub mod model;
pub mod note;
pub mod package;
pub mod section;

pub use deck::Deck;
pub use error::DomainError;
pub use model::{CardTemplate, Model};
pub use note::Note;
pub use package::Package;
pub use section::Section;
