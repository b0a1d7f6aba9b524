use crate::domain::Section;
use crate::infrastructure::markdown::{converter, media};
use anyhow::{Context, Result};
use clap::ValueEnum;
use pulldown_cmark::{CowStr, Event, HeadingLevel, Parser, Tag};
use std::path::Path;
use tracing::debug;

/// Which headings delimit sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SplitMode {
    /// Every `##` heading starts a section titled by the heading
    #[default]
    SingleLevel,
    /// `#` headings set the tag, `##` headings start sections under it
    TwoLevel,
}

/// Top-level block of a rendered document
#[derive(Debug)]
enum Block<'a> {
    Heading {
        level: HeadingLevel,
        text: String,
        events: Vec<Event<'a>>,
    },
    Content(Vec<Event<'a>>),
}

impl<'a> Block<'a> {
    fn from_events(events: Vec<Event<'a>>) -> Self {
        let level = match events.first() {
            Some(Event::Start(Tag::Heading { level, .. })) => Some(*level),
            _ => None,
        };

        match level {
            Some(level) => Block::Heading {
                level,
                text: heading_text(&events),
                events,
            },
            None => Block::Content(events),
        }
    }
}

#[derive(Debug)]
struct OpenSection {
    tag: Option<String>,
    title: String,
    body: String,
}

/// Fold state while walking the top-level blocks
#[derive(Debug, Default)]
struct Accumulator {
    tag: Option<String>,
    open: Option<OpenSection>,
    sections: Vec<Section>,
}

impl Accumulator {
    fn step(self, block: Block<'_>, mode: SplitMode) -> Self {
        match (mode, block) {
            (_, Block::Heading { level: HeadingLevel::H2, text, .. }) => {
                let mut acc = self.close();
                acc.open = Some(OpenSection {
                    tag: acc.tag.clone(),
                    title: text,
                    body: String::new(),
                });
                acc
            }
            (SplitMode::TwoLevel, Block::Heading { level: HeadingLevel::H1, text, .. }) => {
                let mut acc = self.close();
                acc.tag = Some(text);
                acc
            }
            (_, Block::Heading { events, .. }) | (_, Block::Content(events)) => self.append(events),
        }
    }

    /// Content outside an open section is dropped
    fn append(mut self, events: Vec<Event<'_>>) -> Self {
        if let Some(open) = self.open.as_mut() {
            open.body.push_str(&converter::render_events(events));
        }
        self
    }

    fn close(mut self) -> Self {
        if let Some(open) = self.open.take() {
            self.sections.push(Section {
                tag: open.tag,
                title: open.title,
                body: open.body,
            });
        }
        self
    }

    fn finish(self) -> Vec<Section> {
        self.close().sections
    }
}

/// Split a Markdown document into sections delimited by headings
pub fn parse_sections(markdown: &str, mode: SplitMode) -> Vec<Section> {
    top_level_blocks(markdown)
        .into_iter()
        .fold(Accumulator::default(), |acc, block| acc.step(block, mode))
        .finish()
}

/// Read a Markdown file and split it into sections
pub fn extract_sections(path: impl AsRef<Path>, mode: SplitMode) -> Result<Vec<Section>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read markdown file {}", path.display()))?;

    let sections = parse_sections(&content, mode);
    debug!(?path, ?mode, count = sections.len(), "Parsed markdown sections");

    Ok(sections)
}

fn top_level_blocks(markdown: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut pending = Vec::new();
    let mut depth = 0usize;

    for event in Parser::new_ext(markdown, converter::parser_options()).map(rewrite_image_source) {
        match &event {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            _ => {}
        }
        pending.push(event);

        if depth == 0 {
            blocks.push(Block::from_events(std::mem::take(&mut pending)));
        }
    }

    if !pending.is_empty() {
        blocks.push(Block::from_events(pending));
    }
    blocks
}

/// Point every image at its bare filename, media is shipped flat
fn rewrite_image_source(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => {
            let dest_url = CowStr::from(media::base_filename(&dest_url).to_string());
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            })
        }
        Event::Html(html) => Event::Html(media::rewrite_html_image_sources(&html).into()),
        Event::InlineHtml(html) => {
            Event::InlineHtml(media::rewrite_html_image_sources(&html).into())
        }
        other => other,
    }
}

fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_two_h2_sections_when_parsing_single_level_then_returns_title_and_body() {
        let input = "## A\n\nx\n\n## B\n\ny\n";

        let sections = parse_sections(input, SplitMode::SingleLevel);

        assert_eq!(
            sections,
            vec![Section::new("A", "<p>x</p>"), Section::new("B", "<p>y</p>")]
        );
    }

    #[test]
    fn given_h1_tags_when_parsing_two_level_then_tags_sections_with_enclosing_h1() {
        let input = "# Tag1\n\n## S1\n\na\n\n## S2\n\nb\n\n# Tag2\n\n## S3\n\nc\n";

        let sections = parse_sections(input, SplitMode::TwoLevel);

        assert_eq!(
            sections,
            vec![
                Section::tagged("Tag1", "S1", "<p>a</p>"),
                Section::tagged("Tag1", "S2", "<p>b</p>"),
                Section::tagged("Tag2", "S3", "<p>c</p>"),
            ]
        );
    }

    #[test]
    fn given_no_h2_heading_when_parsing_then_returns_no_sections() {
        let input = "# Only a title\n\nSome text\n\n### Deeper\n\nMore text";

        assert!(parse_sections(input, SplitMode::SingleLevel).is_empty());
        assert!(parse_sections(input, SplitMode::TwoLevel).is_empty());
    }

    #[test]
    fn given_content_before_first_h2_when_parsing_then_discards_it() {
        let input = "Intro paragraph\n\n## First\n\nbody";

        let sections = parse_sections(input, SplitMode::SingleLevel);

        assert_eq!(sections, vec![Section::new("First", "<p>body</p>")]);
    }

    #[test]
    fn given_trailing_content_after_last_heading_when_parsing_then_keeps_it_in_last_section() {
        let input = "## Only\n\nfirst\n\n- one\n- two\n\nlast";

        let sections = parse_sections(input, SplitMode::SingleLevel);

        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0].body,
            "<p>first</p><ul><li>one</li><li>two</li></ul><p>last</p>"
        );
    }

    #[test]
    fn given_heading_without_body_when_parsing_then_emits_empty_body() {
        let sections = parse_sections("## Lonely", SplitMode::SingleLevel);

        assert_eq!(sections, vec![Section::new("Lonely", "")]);
    }

    #[test]
    fn given_other_headings_when_parsing_single_level_then_keeps_them_in_body() {
        let input = "## Topic\n\n# Big\n\n### Small\n\ntext";

        let sections = parse_sections(input, SplitMode::SingleLevel);

        assert_eq!(
            sections,
            vec![Section::new("Topic", "<h1>Big</h1><h3>Small</h3><p>text</p>")]
        );
    }

    #[test]
    fn given_content_between_h1_and_h2_when_parsing_two_level_then_discards_it() {
        let input = "# Tag\n\nignored intro\n\n## S\n\nkept";

        let sections = parse_sections(input, SplitMode::TwoLevel);

        assert_eq!(sections, vec![Section::tagged("Tag", "S", "<p>kept</p>")]);
    }

    #[test]
    fn given_h2_before_any_h1_when_parsing_two_level_then_section_has_no_tag() {
        let sections = parse_sections("## Untagged\n\nbody", SplitMode::TwoLevel);

        assert_eq!(sections, vec![Section::new("Untagged", "<p>body</p>")]);
    }

    #[test]
    fn given_heading_with_inline_markup_when_parsing_then_title_is_plain_text() {
        let sections = parse_sections("## What is `Vec<T>` *really*?\n\nA growable array", SplitMode::SingleLevel);

        assert_eq!(sections[0].title, "What is Vec<T> really?");
    }

    #[test]
    fn given_image_with_directory_when_parsing_then_rewrites_src_to_filename() {
        let input = "## Diagram\n\n![diagram](res/diagram.png)";

        let sections = parse_sections(input, SplitMode::SingleLevel);

        assert!(sections[0].body.contains(r#"src="diagram.png""#));
        assert!(!sections[0].body.contains("res/"));
    }

    #[test]
    fn given_deeply_nested_image_path_when_parsing_then_rewrites_src_to_filename() {
        let input = "## Deep\n\n* item\n\n  ![deep](../../assets/res/img/deep.png)";

        let sections = parse_sections(input, SplitMode::SingleLevel);

        assert!(sections[0].body.contains(r#"src="deep.png""#));
        assert!(!sections[0].body.contains("assets"));
    }

    #[test]
    fn given_raw_html_image_when_parsing_then_rewrites_src_to_filename() {
        let input = "## Html\n\n<img src=\"res/raw.png\" width=\"300\">\n";

        let sections = parse_sections(input, SplitMode::SingleLevel);

        assert!(sections[0].body.contains(r#"src="raw.png""#));
    }

    #[test]
    fn given_markdown_file_when_extracting_then_reads_and_parses() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.md");
        fs::write(&path, "## Cache\n\nFast storage").unwrap();

        let sections = extract_sections(&path, SplitMode::SingleLevel).unwrap();

        assert_eq!(sections, vec![Section::new("Cache", "<p>Fast storage</p>")]);
    }

    #[test]
    fn given_nonexistent_file_when_extracting_then_returns_error() {
        assert!(extract_sections("/nonexistent/path/file.md", SplitMode::SingleLevel).is_err());
    }
}
