//! Markdown resolution for the document renderer and the response payload.
//!
//! The PDF body is plain prose: structural markup (heading hashes, bold
//! markers, bullet dashes) is resolved away by walking the parser events and
//! keeping only text content, with block boundaries becoming line breaks.
//! The HTML form is produced by the same parser for the browser payload.

use pulldown_cmark::{html, Event, Parser, TagEnd};

/// Renders markdown to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, Parser::new(markdown));
    out
}

/// Resolves markdown to plain prose. No markup characters survive: headings,
/// emphasis, and list items contribute only their text, each block on its
/// own line. Inline code keeps its content, fenced blocks keep their lines.
pub fn markdown_to_plain_text(markdown: &str) -> String {
    let mut out = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => push_line_break(&mut out),
            Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Heading(_))
            | Event::End(TagEnd::Item)
            | Event::End(TagEnd::CodeBlock)
            | Event::Rule => push_line_break(&mut out),
            _ => {}
        }
    }
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

/// Appends a line break unless the text already ends with one, so nested
/// block ends (item inside list inside blockquote) collapse to one break.
fn push_line_break(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_resolved() {
        let plain = markdown_to_plain_text("# Jane Doe\n\n## Experience");
        assert_eq!(plain, "Jane Doe\nExperience");
        assert!(!plain.contains('#'));
    }

    #[test]
    fn test_bold_and_emphasis_resolved() {
        let plain = markdown_to_plain_text("**Backend Engineer** with *5 years* of experience");
        assert_eq!(plain, "Backend Engineer with 5 years of experience");
        assert!(!plain.contains('*'));
    }

    #[test]
    fn test_bullet_list_resolved_to_lines() {
        let plain = markdown_to_plain_text("- Built APIs\n- Led migrations\n- Cut latency");
        assert_eq!(plain, "Built APIs\nLed migrations\nCut latency");
        assert!(!plain.contains('-'));
    }

    #[test]
    fn test_mixed_document() {
        let md = "# Resume\n\n**Summary:** builds things\n\n- item one\n- item two";
        let plain = markdown_to_plain_text(md);
        assert_eq!(plain, "Resume\nSummary: builds things\nitem one\nitem two");
    }

    #[test]
    fn test_inline_code_keeps_content() {
        let plain = markdown_to_plain_text("Wrote `tokio` services");
        assert_eq!(plain, "Wrote tokio services");
    }

    #[test]
    fn test_plain_text_passes_through() {
        let plain = markdown_to_plain_text("Just a sentence.");
        assert_eq!(plain, "Just a sentence.");
    }

    #[test]
    fn test_html_rendering() {
        let html = markdown_to_html("# Title\n\n**bold**");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_unicode_preserved() {
        let plain = markdown_to_plain_text("Café **naïve** résumé");
        assert_eq!(plain, "Café naïve résumé");
    }
}
