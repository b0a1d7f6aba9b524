// src/cli/args.rs
use crate::constants;
use crate::infrastructure::markdown::section_parser::SplitMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// TOML file overriding deck and model defaults (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (json, markdown, list or init-config)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a deck from a JSON array of {front, back} records
    Json {
        /// JSON input file
        #[arg(short, long, value_name = "FILE", default_value = constants::JSON_INPUT)]
        input: PathBuf,

        /// Output directory, wiped before every run
        #[arg(short, long, value_name = "DIR", default_value = constants::DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Tag attached to every note
        #[arg(short, long, default_value = constants::JSON_TAG)]
        tag: String,

        /// Package file name inside the output directory
        #[arg(long, value_name = "NAME", default_value = constants::JSON_PACKAGE_NAME)]
        file_name: String,
    },

    /// Build a deck from the Markdown files of a directory
    Markdown {
        /// Directory containing the .md sources
        #[arg(short, long, value_name = "DIR", default_value = constants::MARKDOWN_SOURCE_DIR)]
        source: PathBuf,

        /// Image directory, relative to the source directory
        #[arg(short, long, value_name = "DIR", default_value = constants::MARKDOWN_MEDIA_SUBDIR)]
        media_dir: PathBuf,

        /// Output directory, wiped before every run
        #[arg(short, long, value_name = "DIR", default_value = constants::DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Which headings delimit notes
        #[arg(long, value_enum, default_value_t = SplitMode::SingleLevel)]
        split: SplitMode,

        /// Package file name inside the output directory
        #[arg(long, value_name = "NAME", default_value = constants::MARKDOWN_PACKAGE_NAME)]
        file_name: String,
    },

    /// List notes of a package with ID and first line of front field
    List {
        /// Package file to inspect
        #[arg(value_name = "PACKAGE")]
        package: PathBuf,

        /// Optional search term to filter notes by front field content
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
    },

    /// Write the built-in defaults to a TOML config file
    InitConfig {
        /// Destination of the config file
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}
