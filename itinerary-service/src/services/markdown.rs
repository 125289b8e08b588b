//! Markdown to HTML rendering for generated itineraries.

use pulldown_cmark::{html, Options, Parser};

/// Extensions beyond core CommonMark (fenced code is already core).
fn extended_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_DEFINITION_LIST
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Render Markdown to an HTML fragment without a trailing newline.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, extended_options());

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);

    let trimmed_len = output.trim_end().len();
    output.truncate(trimmed_len);
    output
}
