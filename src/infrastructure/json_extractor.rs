use crate::domain::{DomainError, Section};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// One element of the input array; absent keys read as empty strings.
#[derive(Debug, Deserialize)]
struct CardRecord {
    #[serde(default)]
    front: String,
    #[serde(default)]
    back: String,
}

/// Read a JSON array of `{front, back}` objects, one section per element.
pub fn extract_sections(path: impl AsRef<Path>) -> Result<Vec<Section>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file {}", path.display()))?;

    let sections = parse_sections(&content)
        .with_context(|| format!("Failed to parse JSON file {}", path.display()))?;
    debug!(?path, count = sections.len(), "Parsed JSON sections");

    Ok(sections)
}

pub fn parse_sections(content: &str) -> Result<Vec<Section>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_array() {
        return Err(DomainError::InvalidInput("expected a JSON array of objects".to_string()).into());
    }

    let records: Vec<CardRecord> = serde_json::from_value(value)?;
    Ok(records
        .into_iter()
        .map(|record| Section::new(record.front, record.back))
        .collect())
}
