use crate::constants;
use crate::domain::{CardTemplate, Model};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML configuration overriding the built-in deck presets
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

/// Unset values fall back to the preset of the pipeline being run.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct DeckConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ModelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default = "default_model_name")]
    pub name: String,
    #[serde(default = "default_front_field")]
    pub front_field: String,
    #[serde(default = "default_back_field")]
    pub back_field: String,
    #[serde(default = "default_template_name")]
    pub template_name: String,
    #[serde(default = "default_qfmt")]
    pub qfmt: String,
    #[serde(default = "default_afmt")]
    pub afmt: String,
    #[serde(default = "default_css")]
    pub css: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MediaConfig {
    #[serde(default = "default_media_extensions")]
    pub extensions: Vec<String>,
}

// Default value functions
fn default_model_name() -> String { constants::MODEL_NAME.to_string() }
fn default_front_field() -> String { constants::FRONT_FIELD.to_string() }
fn default_back_field() -> String { constants::BACK_FIELD.to_string() }
fn default_template_name() -> String { constants::TEMPLATE_NAME.to_string() }
fn default_qfmt() -> String { constants::QUESTION_FORMAT.to_string() }
fn default_afmt() -> String { constants::ANSWER_FORMAT.to_string() }
fn default_css() -> String { constants::CARD_CSS.to_string() }
fn default_media_extensions() -> Vec<String> {
    constants::MEDIA_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            id: None,
            name: default_model_name(),
            front_field: default_front_field(),
            back_field: default_back_field(),
            template_name: default_template_name(),
            qfmt: default_qfmt(),
            afmt: default_afmt(),
            css: default_css(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            extensions: default_media_extensions(),
        }
    }
}

impl ModelConfig {
    /// Two-field model with a single card template
    pub fn to_model(&self, id: i64) -> Model {
        Model::new(
            id,
            self.name.clone(),
            vec![self.front_field.clone(), self.back_field.clone()],
            vec![CardTemplate {
                name: self.template_name.clone(),
                qfmt: self.qfmt.clone(),
                afmt: self.afmt.clone(),
            }],
            self.css.clone(),
        )
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load the given file, or the built-in defaults when no file is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_empty_toml_when_parsing_then_uses_builtin_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.model.name, "Simple Model");
        assert_eq!(config.media.extensions, vec!["png"]);
        assert_eq!(config.deck.id, None);
    }

    #[test]
    fn given_partial_toml_when_parsing_then_merges_with_defaults() {
        let toml_str = r#"
[deck]
name = "Rust Deck"
id = 1234567890

[model]
css = ".card { color: red; }"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();

        assert_eq!(config.deck.name.as_deref(), Some("Rust Deck"));
        assert_eq!(config.deck.id, Some(1234567890));
        assert_eq!(config.deck.description, None);
        assert_eq!(config.model.css, ".card { color: red; }");
        assert_eq!(config.model.front_field, "Front");
    }

    #[test]
    fn given_saved_config_when_loading_then_returns_same_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ankideck.toml");

        let mut config = Config::default();
        config.deck.description = Some("My deck".to_string());
        config.model.id = Some(42);
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn given_default_created_when_loading_then_matches_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ankideck.toml");

        Config::create_default(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn given_no_path_when_loading_or_default_then_returns_defaults() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }

    #[test]
    fn given_model_config_when_building_model_then_has_two_fields_and_one_template() {
        let model = ModelConfig::default().to_model(99);

        assert_eq!(model.id, 99);
        assert_eq!(model.fields, vec!["Front", "Back"]);
        assert_eq!(model.templates.len(), 1);
        assert_eq!(model.templates[0].name, "Card 1");
    }

    #[test]
    fn given_invalid_toml_when_loading_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        std::fs::write(&path, "[deck\nname = ").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
