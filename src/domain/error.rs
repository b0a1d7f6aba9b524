// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note has {actual} fields but model expects {expected}")]
    FieldCount { expected: usize, actual: usize },
    #[error("Note '{note}' references media file '{file}' which is not part of the package")]
    MissingMedia { file: String, note: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
