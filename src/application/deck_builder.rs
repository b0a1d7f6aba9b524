// src/application/deck_builder.rs
use crate::application::deck_assembler::{self, SourceSections, TagRule};
use crate::constants;
use crate::domain::{Deck, DomainError, Model, Package};
use crate::infrastructure::json_extractor;
use crate::infrastructure::markdown::section_parser::{self, SplitMode};
use crate::infrastructure::output_stager::{self, OutputStager};
use crate::infrastructure::Config;
use crate::ports::PackageWriter;
use anyhow::{Context, Result};
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Built-in deck metadata for one pipeline
#[derive(Debug, Clone, Copy)]
pub struct DeckPreset {
    pub name: &'static str,
    pub description: &'static str,
    /// `None` generates a fresh ID per run
    pub deck_id: Option<i64>,
    pub model_id: Option<i64>,
}

pub const JSON_PRESET: DeckPreset = DeckPreset {
    name: constants::JSON_DECK_NAME,
    description: constants::JSON_DECK_DESCRIPTION,
    deck_id: None,
    model_id: None,
};

pub const MARKDOWN_PRESET: DeckPreset = DeckPreset {
    name: constants::MARKDOWN_DECK_NAME,
    description: constants::MARKDOWN_DECK_DESCRIPTION,
    deck_id: Some(constants::MARKDOWN_DECK_ID),
    model_id: Some(constants::MARKDOWN_MODEL_ID),
};

/// Random identifier in the range Anki uses for hand-made decks and models
pub fn generate_id() -> i64 {
    rand::rng().random_range(constants::RANDOM_ID_MIN..=constants::RANDOM_ID_MAX)
}

/// Deck metadata, model and media policy for one run
#[derive(Debug, Clone)]
pub struct DeckSettings {
    pub deck_id: i64,
    pub deck_name: String,
    pub description: String,
    pub model: Model,
    pub media_extensions: Vec<String>,
}

impl DeckSettings {
    /// Config values win over the preset; missing IDs are generated
    pub fn resolve(preset: &DeckPreset, config: &Config) -> Self {
        let deck_id = config
            .deck
            .id
            .or(preset.deck_id)
            .unwrap_or_else(generate_id);
        let model_id = config
            .model
            .id
            .or(preset.model_id)
            .unwrap_or_else(generate_id);

        Self {
            deck_id,
            deck_name: config
                .deck
                .name
                .clone()
                .unwrap_or_else(|| preset.name.to_string()),
            description: config
                .deck
                .description
                .clone()
                .unwrap_or_else(|| preset.description.to_string()),
            model: config.model.to_model(model_id),
            media_extensions: config.media.extensions.clone(),
        }
    }
}

/// Inputs of the JSON pipeline
#[derive(Debug, Clone)]
pub struct JsonRun {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub tag: String,
    pub file_name: String,
}

/// Inputs of the Markdown pipeline
#[derive(Debug, Clone)]
pub struct MarkdownRun {
    pub source_dir: PathBuf,
    pub media_dir: PathBuf,
    pub output_dir: PathBuf,
    pub split: SplitMode,
    pub file_name: String,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub package_path: PathBuf,
    pub notes: usize,
    pub media_files: usize,
}

/// Use case: turn source documents into one package file
pub struct DeckBuilder<W: PackageWriter> {
    writer: W,
    settings: DeckSettings,
}

impl<W: PackageWriter> DeckBuilder<W> {
    pub fn new(writer: W, settings: DeckSettings) -> Self {
        Self { writer, settings }
    }

    /// One note per JSON record, all carrying the same tag
    pub fn build_from_json(&self, run: &JsonRun) -> Result<BuildReport> {
        let stager = OutputStager::new(&run.output_dir);
        stager.reset()?;

        let sections = json_extractor::extract_sections(&run.input)?;
        let source_name = source_name(&run.input);
        let sources = vec![SourceSections::new(source_name, sections)];

        self.package(
            &stager,
            &sources,
            &TagRule::Constant(run.tag.clone()),
            Vec::new(),
            &run.file_name,
        )
    }

    /// One note per Markdown section across every source file
    pub fn build_from_markdown(&self, run: &MarkdownRun) -> Result<BuildReport> {
        if !run.source_dir.is_dir() {
            return Err(DomainError::InvalidInput(format!(
                "Source directory not found: {}",
                run.source_dir.display()
            ))
            .into());
        }

        let stager = OutputStager::new(&run.output_dir);
        stager.reset()?;
        let media = stager.stage_media(&run.media_dir, &self.settings.media_extensions)?;

        let mut sources = Vec::new();
        for path in markdown_files(&run.source_dir)? {
            let sections = section_parser::extract_sections(&path, run.split)?;
            sources.push(SourceSections::new(source_name(&path), sections));
        }
        info!(files = sources.len(), "Parsed markdown sources");

        let rule = match run.split {
            SplitMode::SingleLevel => TagRule::SourceName,
            SplitMode::TwoLevel => TagRule::SectionTag,
        };
        self.package(&stager, &sources, &rule, media, &run.file_name)
    }

    fn package(
        &self,
        stager: &OutputStager,
        sources: &[SourceSections],
        rule: &TagRule,
        media: Vec<PathBuf>,
        file_name: &str,
    ) -> Result<BuildReport> {
        let settings = &self.settings;
        let mut deck = Deck::new(settings.deck_id, &settings.deck_name, &settings.description);
        let notes = deck_assembler::assemble(&mut deck, &settings.model, sources, rule)?;
        if deck.is_empty() {
            warn!(deck = %deck.name, "No sections found, writing an empty deck");
        }
        info!(deck = %deck.name, notes, "Assembled deck");

        let media_count = media.len();
        let package = Package::new(deck, settings.model.clone(), media);
        package.verify_media()?;

        let package_path = stager.package_path(file_name);
        self.writer
            .write_package(&package, &package_path)
            .with_context(|| format!("Failed to write package {}", package_path.display()))?;

        Ok(BuildReport {
            package_path,
            notes,
            media_files: media_count,
        })
    }
}

/// Markdown sources in file-name order, skipping repository boilerplate
fn markdown_files(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let files: Vec<PathBuf> = output_stager::list_files(source_dir, &["md".to_string()])?
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| !constants::MARKDOWN_EXCLUDED_FILES.contains(&n))
                .unwrap_or(false)
        })
        .collect();
    debug!(?files, "Discovered markdown files");
    Ok(files)
}

fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
