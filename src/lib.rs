// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::application::deck_builder::{JSON_PRESET, MARKDOWN_PRESET};
use crate::application::{DeckBuilder, DeckSettings, JsonRun, MarkdownRun, PackageLister};
use crate::cli::args::{Args, Command};
use anyhow::Result;
use infrastructure::{ApkgWriter, Config};
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting ankideck with arguments");

    match args.command {
        Command::Json {
            input,
            output,
            tag,
            file_name,
        } => {
            let config = Config::load_or_default(args.config.as_deref())?;
            let settings = DeckSettings::resolve(&JSON_PRESET, &config);
            let builder = DeckBuilder::new(ApkgWriter::new(), settings);

            info!(?input, "Building deck from JSON");
            let report = builder.build_from_json(&JsonRun {
                input,
                output_dir: output,
                tag,
                file_name,
            })?;
            println!(
                "Wrote {} notes to {}",
                report.notes,
                report.package_path.display()
            );
        }
        Command::Markdown {
            source,
            media_dir,
            output,
            split,
            file_name,
        } => {
            let config = Config::load_or_default(args.config.as_deref())?;
            let settings = DeckSettings::resolve(&MARKDOWN_PRESET, &config);
            let builder = DeckBuilder::new(ApkgWriter::new(), settings);

            info!(?source, ?split, "Building deck from markdown");
            let report = builder.build_from_markdown(&MarkdownRun {
                media_dir: source.join(media_dir),
                source_dir: source,
                output_dir: output,
                split,
                file_name,
            })?;
            println!(
                "Wrote {} notes and {} media files to {}",
                report.notes,
                report.media_files,
                report.package_path.display()
            );
        }
        Command::List { package, search } => {
            let notes = PackageLister::list_notes(&package, search.as_deref())?;
            for note in notes {
                println!("{}\t{}", note.id, note.front);
            }
        }
        Command::InitConfig { path } => {
            Config::create_default(&path)?;
            info!(?path, "Wrote default config");
        }
    }

    Ok(())
}
