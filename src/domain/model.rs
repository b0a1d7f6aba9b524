// src/domain/model.rs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTemplate {
    pub name: String,
    pub qfmt: String,
    pub afmt: String,
}

/// Field/template/styling definition shared by every note of a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub id: i64,
    pub name: String,
    pub fields: Vec<String>,
    pub templates: Vec<CardTemplate>,
    pub css: String,
}

impl Model {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        fields: Vec<String>,
        templates: Vec<CardTemplate>,
        css: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            fields,
            templates,
            css: css.into(),
        }
    }
}

