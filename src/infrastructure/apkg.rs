// src/infrastructure/apkg.rs
use crate::domain::{Deck, Model, Package};
use crate::ports::PackageWriter;
use anyhow::{anyhow, Context, Result};
use rusqlite::Connection;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use zip::ZipArchive;

const COLLECTION_ENTRY: &str = "collection.anki2";
const MEDIA_MANIFEST_ENTRY: &str = "media";
const FIELD_SEPARATOR: &str = "\x1f";
const DEFAULT_DECK_ID: i64 = 1;

/// Writes `.apkg` archives through `genanki-rs`
#[derive(Debug, Default)]
pub struct ApkgWriter;

impl ApkgWriter {
    pub fn new() -> Self {
        Self
    }
}

impl PackageWriter for ApkgWriter {
    #[instrument(level = "debug", skip(self, package), fields(deck = %package.deck.name))]
    fn write_package(&self, package: &Package, out_path: &Path) -> Result<()> {
        let deck = anki_deck(&package.deck, &package.model)?;
        let media = media_paths(&package.media_files)?;
        let out = utf8(out_path)?;

        let mut apkg = genanki_rs::Package::new(vec![deck], media)
            .map_err(|e| anyhow!("Failed to prepare package: {}", e))?;
        apkg.write_to_file(out)
            .map_err(|e| anyhow!("Failed to write package {}: {}", out, e))?;

        info!(
            path = %out_path.display(),
            notes = package.deck.len(),
            media = package.media_files.len(),
            "Wrote package"
        );
        Ok(())
    }
}

fn anki_model(model: &Model) -> genanki_rs::Model {
    let fields = model
        .fields
        .iter()
        .map(|name| genanki_rs::Field::new(name.as_str()))
        .collect();
    let templates = model
        .templates
        .iter()
        .map(|t| {
            genanki_rs::Template::new(t.name.as_str())
                .qfmt(t.qfmt.as_str())
                .afmt(t.afmt.as_str())
        })
        .collect();

    genanki_rs::Model::new_with_options(
        model.id,
        model.name.as_str(),
        fields,
        templates,
        Some(model.css.as_str()),
        None,
        None,
        None,
        None,
    )
}

fn anki_deck(deck: &Deck, model: &Model) -> Result<genanki_rs::Deck> {
    let anki_model = anki_model(model);
    let mut anki_deck =
        genanki_rs::Deck::new(deck.id, deck.name.as_str(), deck.description.as_str());

    for note in deck.notes() {
        let fields: Vec<&str> = note.fields.iter().map(String::as_str).collect();
        let tags: Vec<&str> = note.tags.iter().map(String::as_str).collect();
        let anki_note =
            genanki_rs::Note::new_with_options(anki_model.clone(), fields, None, Some(tags), None)
                .map_err(|e| anyhow!("Invalid note '{}': {}", note.front(), e))?;
        anki_deck.add_note(anki_note);
    }
    debug!(deck = %deck.name, notes = deck.len(), "Converted deck");
    Ok(anki_deck)
}

fn media_paths(media_files: &[PathBuf]) -> Result<Vec<&str>> {
    media_files
        .iter()
        .map(|path| {
            if !path.is_file() {
                return Err(anyhow!("Media file not found: {}", path.display()));
            }
            utf8(path)
        })
        .collect()
}

fn utf8(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| anyhow!("Path is not valid UTF-8: {:?}", path))
}

/// A note as stored inside a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedNote {
    pub id: i64,
    pub guid: String,
    pub fields: Vec<String>,
    pub tags: Vec<String>,
}

/// Decoded contents of a package file
#[derive(Debug, Clone)]
pub struct PackageContents {
    pub deck_names: Vec<String>,
    pub notes: Vec<PackagedNote>,
    /// Media file names in archive entry order
    pub media: Vec<String>,
}

/// Read back the notes, decks and media manifest of a package file
#[instrument(level = "debug")]
pub fn read_package(path: &Path) -> Result<PackageContents> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open package {}", path.display()))?;
    let mut archive = ZipArchive::new(file).context("Package is not a valid archive")?;

    let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
    let db_path = temp_dir.path().join(COLLECTION_ENTRY);
    {
        let mut entry = archive
            .by_name(COLLECTION_ENTRY)
            .context("Package has no collection")?;
        let mut db_file = File::create(&db_path)?;
        std::io::copy(&mut entry, &mut db_file)?;
    }

    let media = {
        let mut entry = archive
            .by_name(MEDIA_MANIFEST_ENTRY)
            .context("Package has no media manifest")?;
        let mut content = String::new();
        entry.read_to_string(&mut content)?;
        let manifest: BTreeMap<String, String> =
            serde_json::from_str(&content).context("Invalid media manifest")?;
        let mut entries: Vec<(usize, String)> = manifest
            .into_iter()
            .map(|(k, v)| -> Result<(usize, String)> { Ok((k.parse::<usize>()?, v)) })
            .collect::<Result<_>>()?;
        entries.sort();
        entries.into_iter().map(|(_, name)| name).collect()
    };

    let conn = Connection::open(&db_path)?;
    let decks: String = conn.query_row("SELECT decks FROM col", [], |row| row.get(0))?;
    let decks: Map<String, Value> = serde_json::from_str(&decks).context("Invalid deck metadata")?;
    let mut deck_names: Vec<String> = decks
        .values()
        .filter(|d| d["id"].as_i64() != Some(DEFAULT_DECK_ID))
        .filter_map(|d| d["name"].as_str().map(String::from))
        .collect();
    deck_names.sort();

    let mut stmt = conn.prepare("SELECT id, guid, flds, tags FROM notes ORDER BY id")?;
    let notes = stmt
        .query_map([], |row| {
            let flds: String = row.get(2)?;
            let tags: String = row.get(3)?;
            Ok(PackagedNote {
                id: row.get(0)?,
                guid: row.get(1)?,
                fields: flds.split(FIELD_SEPARATOR).map(String::from).collect(),
                tags: tags.split_whitespace().map(String::from).collect(),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(PackageContents {
        deck_names,
        notes,
        media,
    })
}
