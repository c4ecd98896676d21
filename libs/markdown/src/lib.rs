//! Markdown helpers for post bodies.

use entity::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser, TagEnd};

const PREVIEW_CHARS: usize = 150;
const SUMMARY_CHARS: usize = 100;

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_MATH
}

/// Renders `markdown` to HTML. Math is left as
/// `<span class="math math-inline">` or `math-display` spans for a
/// typesetter to pick up.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, options());

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// Text content of `markdown` with markup removed. Blocks are separated by
/// a single space.
pub fn plain_text(markdown: &str) -> String {
    let mut output = String::new();

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Text(text)
            | Event::Code(text)
            | Event::InlineMath(text)
            | Event::DisplayMath(text) => output.push_str(&text),
            Event::SoftBreak | Event::HardBreak => output.push(' '),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::TableCell,
            ) => output.push(' '),
            _ => {}
        }
    }

    output.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Teaser text for a post card: the summary when there is one, otherwise
/// the start of the content.
pub fn preview(post: &Post) -> String {
    match &post.summary {
        Some(summary) => summary.clone(),
        None => format!("{}...", truncate(&post.content, PREVIEW_CHARS)),
    }
}

/// Summary to save with a post whose author left it blank.
pub fn default_summary(content: &str) -> String {
    truncate(content, SUMMARY_CHARS).to_string()
}

fn truncate(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
