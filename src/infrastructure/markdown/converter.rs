use lazy_static::lazy_static;
use pulldown_cmark::{html, Event, Options};
use regex::Regex;

lazy_static! {
    static ref NEWLINE_TAG_REGEX: Regex =
        Regex::new(r"\n?(<.+?>)\n?").expect("Failed to compile newline tag regex");
}

/// Markdown extensions enabled for every source document
pub fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render a run of parser events to card-ready HTML
pub fn render_events<'a>(events: impl IntoIterator<Item = Event<'a>>) -> String {
    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    remove_newlines_around_tags(&html_output)
}

fn remove_newlines_around_tags(html: &str) -> String {
    NEWLINE_TAG_REGEX.replace_all(html, "$1").to_string()
}
