//! Markdown rendering via pulldown-cmark.
//!
//! Two pure conversions: Markdown to HTML for display and Markdown to
//! plain text for summaries. The Markdown engine is an opaque
//! collaborator; only the extension set is ours.

use pulldown_cmark::{Event, Options, Parser, TagEnd, html};

/// Summary length cap in characters
const SUMMARY_LEN: usize = 80;

/// Options for markdown conversion
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
}

impl MarkdownOptions {
    /// Create options with all extensions enabled
    pub fn all() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
        }
    }

    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        opts
    }
}

/// Render markdown to an HTML fragment.
pub fn to_html(markdown: &str, options: &MarkdownOptions) -> String {
    let parser = Parser::new_ext(markdown, options.to_pulldown_options());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Render markdown to plain text.
///
/// Tag structure is dropped; text, inline code and math are kept, and
/// block boundaries become newlines.
pub fn to_plain_text(markdown: &str, options: &MarkdownOptions) -> String {
    let parser = Parser::new_ext(markdown, options.to_pulldown_options());
    let mut out = String::new();

    for event in parser {
        match event {
            Event::Text(text) => out.push_str(&text),
            Event::Code(code) => out.push_str(&code),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::BlockQuote(_)
                | TagEnd::TableRow,
            ) => out.push('\n'),
            _ => {}
        }
    }

    out
}

/// Build the post summary from the plain-text rendering.
///
/// The slice bound is `min(80, chars of the raw Markdown body)` - the
/// raw body length is the clamp, not the plain text's - additionally
/// bounded by the plain text's own length so the slice can never run
/// out of range. Operates on `char` boundaries, so multi-byte input
/// cannot panic. Trailing spaces are trimmed and a literal `...` is
/// appended.
pub fn summarize(raw_body: &str, plain_text: &str) -> String {
    let limit = SUMMARY_LEN.min(raw_body.chars().count());
    let head: String = plain_text.chars().take(limit).collect();
    format!("{}...", head.trim_end_matches(' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_renders_html() {
        let html = to_html("# Hi\nthere", &MarkdownOptions::all());
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains("there"));
    }

    #[test]
    fn test_tables_extension_gated() {
        let table = "| a | b |\n|---|---|\n| 1 | 2 |";
        assert!(to_html(table, &MarkdownOptions::all()).contains("<table>"));
        assert!(!to_html(table, &MarkdownOptions::default()).contains("<table>"));
    }

    #[test]
    fn test_plain_text_drops_markup() {
        let plain = to_plain_text("# Hi\nthere", &MarkdownOptions::all());
        assert_eq!(plain, "Hi\nthere\n");

        let plain = to_plain_text("some *emphasis* and `code`", &MarkdownOptions::all());
        assert_eq!(plain, "some emphasis and code\n");
    }

    #[test]
    fn test_summary_ends_with_ellipsis() {
        let raw = "# Hi\nthere";
        let plain = to_plain_text(raw, &MarkdownOptions::all());
        let summary = summarize(raw, &plain);
        assert!(summary.ends_with("..."));
        assert!(summary.starts_with("Hi"));
    }

    #[test]
    fn test_summary_never_exceeds_cap() {
        let raw = "word ".repeat(100);
        let plain = to_plain_text(&raw, &MarkdownOptions::all());
        let summary = summarize(&raw, &plain);
        let body = summary.strip_suffix("...").unwrap();
        assert!(body.chars().count() <= 80);
        assert!(!body.ends_with(' '));
    }

    #[test]
    fn test_summary_of_empty_body() {
        assert_eq!(summarize("", ""), "...");
    }

    #[test]
    fn test_summary_short_markup_heavy_body() {
        // Raw body longer than its plain text; the clamp must not
        // reach past the plain text's end.
        let raw = "**bold**";
        let plain = to_plain_text(raw, &MarkdownOptions::all());
        let summary = summarize(raw, &plain);
        assert_eq!(summary, "bold\n...");
    }

    #[test]
    fn test_summary_multibyte_input() {
        let raw = "日本語のテキスト".repeat(20);
        let plain = to_plain_text(&raw, &MarkdownOptions::all());
        let summary = summarize(&raw, &plain);
        assert!(summary.ends_with("..."));
        assert!(summary.strip_suffix("...").unwrap().chars().count() <= 80);
    }
}
