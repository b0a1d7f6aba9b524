// src/constants.rs
//
// Built-in deck presets, card template and filesystem defaults.
// Every value here can be overridden through the TOML config or CLI flags.

/// Inclusive range used when a deck or model ID has to be generated.
pub const RANDOM_ID_MIN: i64 = 1_000_000_000;
pub const RANDOM_ID_MAX: i64 = 9_999_999_999;

/// Default output directory; wiped and recreated on every run.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

// JSON pipeline
pub const JSON_INPUT: &str = "data/atomic_habits.json";
pub const JSON_PACKAGE_NAME: &str = "atomichabits.apkg";
pub const JSON_TAG: &str = "atomic_habits";
pub const JSON_DECK_NAME: &str = "Atomic Habits";
pub const JSON_DECK_DESCRIPTION: &str =
    "Anki deck for Atomic Habits generated from JSON generated by ChatGPT.";

// Markdown pipeline
pub const MARKDOWN_SOURCE_DIR: &str = "designdeck";
pub const MARKDOWN_MEDIA_SUBDIR: &str = "res";
pub const MARKDOWN_PACKAGE_NAME: &str = "designdeck.apkg";
pub const MARKDOWN_DECK_NAME: &str = "Design Deck";
pub const MARKDOWN_DECK_ID: i64 = 2059400110;
pub const MARKDOWN_MODEL_ID: i64 = 1607392319;
pub const MARKDOWN_DECK_DESCRIPTION: &str =
    "Anki deck generated from https://github.com/teivah/designdeck?tab=readme-ov-file.";

/// Markdown files in the source directory that never become notes.
pub const MARKDOWN_EXCLUDED_FILES: &[&str] = &["README.md", "LICENSE.md"];

// Card model, mirrors Anki's "Basic" note type with the tags shown on the front.
pub const MODEL_NAME: &str = "Simple Model";
pub const FRONT_FIELD: &str = "Front";
pub const BACK_FIELD: &str = "Back";
pub const TEMPLATE_NAME: &str = "Card 1";
pub const QUESTION_FORMAT: &str =
    r#"{{Front}}<p style="font-size:15px;font-style:italic;">{{Tags}}</p>"#;
pub const ANSWER_FORMAT: &str = r#"{{FrontSide}}<hr id="answer">{{Back}}"#;
pub const CARD_CSS: &str =
    ".card {font-family: arial; font-size: 20px; color: black; background-color: white;}";

/// Media file extensions copied from the media directory into the package.
pub const MEDIA_EXTENSIONS: &[&str] = &["png"];
