//! Paginated PDF emission for generated documents.
//!
//! A document is a title block (16 pt) followed by a blank gap and the body
//! (12 pt), word-wrapped against the static DejaVu Sans metric table and
//! broken onto new pages when the cursor passes the bottom margin. The
//! typeface is the bundled DejaVu Sans TTF: builtin PDF faces only cover
//! WinAnsi, and generated text routinely carries accented letters and
//! symbols that would otherwise fail to encode.

use std::io::Cursor;

use printpdf::{Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use thiserror::Error;

use crate::render::font_metrics::{dejavu_sans_metrics, FontMetricTable, PageMetrics};
use crate::render::markdown::markdown_to_plain_text;

/// The bundled document typeface.
pub const DEJAVU_SANS: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF error: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// Renders markdown documents to paginated PDF bytes.
///
/// Rendering is CPU-bound; callers on the async runtime run it inside
/// `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct PdfRenderer {
    page: PageMetrics,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self::with_page_metrics(PageMetrics::default())
    }

    pub fn with_page_metrics(page: PageMetrics) -> Self {
        PdfRenderer { page }
    }

    /// Renders `markdown` under a `title` block and returns the PDF bytes.
    ///
    /// Markdown markup is resolved to plain prose first; nothing structural
    /// survives into the page. Blank lines in the resolved body advance the
    /// cursor without emitting text.
    pub fn render(&self, markdown: &str, title: &str) -> Result<Vec<u8>, RenderError> {
        let metrics = dejavu_sans_metrics();
        let body = markdown_to_plain_text(markdown);

        let title_lines = metrics.wrap_words(title, self.page.text_width_em(self.page.title_size_pt));
        let body_lines = resolve_body_lines(&body, metrics, &self.page);

        let (doc, page_idx, layer_idx) = PdfDocument::new(
            title,
            Mm(self.page.page_width_mm),
            Mm(self.page.page_height_mm),
            "Layer 1",
        );
        let font = doc.add_external_font(Cursor::new(DEJAVU_SANS))?;

        let mut writer = PageWriter {
            doc: &doc,
            layer: doc.get_page(page_idx).get_layer(layer_idx),
            page: &self.page,
            font: &font,
            cursor_mm: self.page.margin_mm,
        };

        for line in &title_lines {
            writer.write_line(line, self.page.title_size_pt, self.page.title_line_mm);
        }
        writer.cursor_mm += self.page.title_gap_mm;

        for line in &body_lines {
            if line.is_empty() {
                writer.cursor_mm += self.page.body_line_mm;
            } else {
                writer.write_line(line, self.page.body_size_pt, self.page.body_line_mm);
            }
        }

        Ok(doc.save_to_bytes()?)
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Word-wraps each resolved body line at the body width, preserving blank
/// lines as paragraph gaps.
fn resolve_body_lines(body: &str, metrics: &FontMetricTable, page: &PageMetrics) -> Vec<String> {
    let width_em = page.text_width_em(page.body_size_pt);
    let mut lines = Vec::new();
    for source_line in body.lines() {
        if source_line.trim().is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(metrics.wrap_words(source_line, width_em));
        }
    }
    lines
}

/// Tracks the vertical cursor across page breaks.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    page: &'a PageMetrics,
    font: &'a printpdf::IndirectFontRef,
    /// Distance from the page top to the last written baseline.
    cursor_mm: f32,
}

impl PageWriter<'_> {
    fn write_line(&mut self, text: &str, size_pt: f32, line_mm: f32) {
        self.cursor_mm += line_mm;
        if self.cursor_mm > self.page.page_height_mm - self.page.margin_mm {
            let (page_idx, layer_idx) = self.doc.add_page(
                Mm(self.page.page_width_mm),
                Mm(self.page.page_height_mm),
                "Layer 1",
            );
            self.layer = self.doc.get_page(page_idx).get_layer(layer_idx);
            self.cursor_mm = self.page.margin_mm + line_mm;
        }
        self.layer.use_text(
            text,
            size_pt,
            Mm(self.page.margin_mm),
            Mm(self.page.page_height_mm - self.cursor_mm),
            self.font,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts page objects in the raw bytes. Every page dictionary carries
    /// exactly one `/Contents` key and nothing else does.
    fn page_count(bytes: &[u8]) -> usize {
        let needle = b"/Contents";
        bytes.windows(needle.len()).filter(|w| w == needle).count()
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let renderer = PdfRenderer::new();
        let bytes = renderer.render("# Summary\n\nBuilds backends.", "Tailored Resume");
        let bytes = bytes.expect("render should succeed");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_decoded_text_contains_title_then_body() {
        let renderer = PdfRenderer::new();
        let md = "# Jane Doe\n\n**Summary:** distributed systems engineer\n\n- Cut p99 latency";
        let bytes = renderer.render(md, "Tailored Resume").unwrap();

        let text = pdf_extract::extract_text_from_mem(&bytes).expect("extractable text");
        let title_at = text.find("Tailored Resume").expect("title in decoded text");
        let body_at = text
            .find("distributed systems engineer")
            .expect("body in decoded text");
        assert!(title_at < body_at, "title must precede body");
        // Structural markup must not survive into the page.
        assert!(!text.contains('#'));
        assert!(!text.contains("**"));
    }

    #[test]
    fn test_decoded_text_preserves_accented_characters() {
        let renderer = PdfRenderer::new();
        let bytes = renderer.render("Expérience: résumé naïve café", "Cover Letter").unwrap();
        let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();
        assert!(text.contains("résumé"));
        assert!(text.contains("café"));
    }

    #[test]
    fn test_short_document_is_single_page() {
        let renderer = PdfRenderer::new();
        let bytes = renderer.render("One short line.", "Tailored Resume").unwrap();
        assert_eq!(page_count(&bytes), 1, "expected exactly one page");
    }

    #[test]
    fn test_long_body_paginates() {
        let renderer = PdfRenderer::new();
        // ~120 paragraph lines at 8mm each is far past one A4 page.
        let md = (0..120)
            .map(|i| format!("Paragraph number {i} describing one more project in detail."))
            .collect::<Vec<_>>()
            .join("\n\n");
        let bytes = renderer.render(&md, "Tailored Resume").unwrap();
        assert!(
            page_count(&bytes) > 1,
            "expected multiple pages for overlong body"
        );
    }

    #[test]
    fn test_blank_lines_do_not_emit_text() {
        let renderer = PdfRenderer::new();
        let bytes = renderer.render("first\n\n\n\nsecond", "Doc").unwrap();
        let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();
        assert!(text.contains("first"));
        assert!(text.contains("second"));
    }
}
