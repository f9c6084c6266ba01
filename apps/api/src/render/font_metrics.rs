//! Static font-metric table for the bundled DejaVu Sans typeface.
//!
//! Character widths are in em units (relative to font size), derived from the
//! font's advance widths and rounded, an intentional approximation. The
//! table covers ASCII 0x20..=0x7E; every other codepoint (accented letters,
//! symbols) falls back to an average width. Wrapping decisions tolerate the
//! residual ±1–2% error because the page keeps conventional margins.

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 0.352_778;

// ────────────────────────────────────────────────────────────────────────────
// Page metrics
// ────────────────────────────────────────────────────────────────────────────

/// Layout parameters for a rendered document page.
///
/// Defaults: A4 paper, 15 mm margins, 16 pt title with a 5 mm gap below it,
/// 12 pt body on 8 mm lines.
#[derive(Debug, Clone)]
pub struct PageMetrics {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    pub title_size_pt: f32,
    pub title_line_mm: f32,
    pub title_gap_mm: f32,
    pub body_size_pt: f32,
    pub body_line_mm: f32,
}

impl Default for PageMetrics {
    fn default() -> Self {
        PageMetrics {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 15.0,
            title_size_pt: 16.0,
            title_line_mm: 10.0,
            title_gap_mm: 5.0,
            body_size_pt: 12.0,
            body_line_mm: 8.0,
        }
    }
}

impl PageMetrics {
    /// Usable text width between the left and right margins.
    pub fn text_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    /// Usable text width in em units at the given font size.
    pub fn text_width_em(&self, font_size_pt: f32) -> f32 {
        self.text_width_mm() / (font_size_pt * MM_PER_PT)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a typeface.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in em units, covering
/// 0x20 (space) through 0x7E (~). Non-ASCII codepoints use
/// `average_char_width`.
pub struct FontMetricTable {
    widths: [f32; 95],
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Greedy word-wrap of a single logical line into printed lines no wider
    /// than `max_width_em`. A word that alone exceeds the width gets its own
    /// line rather than being broken mid-word. Blank input yields no lines.
    pub fn wrap_words(&self, text: &str, max_width_em: f32) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in words {
            let word_width = self.measure_str(word);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + self.space_width + word_width > max_width_em {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += self.space_width + word_width;
            }
        }
        lines.push(current);
        lines
    }
}

/// DejaVu Sans, the bundled document face. Widths from the font's advance
/// tables (2048 units/em), rounded to two decimals.
static DEJAVU_SANS_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.32, 0.40, 0.46, 0.84, 0.64, 0.95, 0.78, 0.28, 0.39, 0.39, 0.50, 0.84, 0.32, 0.36, 0.32, 0.34,
        // 0     1     2     3     4     5     6     7     8     9
        0.64, 0.64, 0.64, 0.64, 0.64, 0.64, 0.64, 0.64, 0.64, 0.64,
        // :     ;     <     =     >     ?     @
        0.34, 0.34, 0.84, 0.84, 0.84, 0.53, 1.00,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.68, 0.69, 0.70, 0.77, 0.63, 0.58, 0.77, 0.75, 0.29, 0.29, 0.66, 0.56, 0.86,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.75, 0.79, 0.60, 0.79, 0.70, 0.63, 0.61, 0.73, 0.68, 0.99, 0.69, 0.61, 0.69,
        // [     \     ]     ^     _     `
        0.39, 0.34, 0.39, 0.84, 0.50, 0.50,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.61, 0.64, 0.55, 0.64, 0.62, 0.35, 0.64, 0.63, 0.28, 0.28, 0.58, 0.28, 0.97,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.63, 0.61, 0.64, 0.64, 0.41, 0.52, 0.39, 0.63, 0.59, 0.82, 0.59, 0.59, 0.53,
        // {     |     }     ~
        0.64, 0.34, 0.64, 0.84,
    ],
    average_char_width: 0.60,
    space_width: 0.32,
};

/// Returns the metric table for the bundled document face.
pub fn dejavu_sans_metrics() -> &'static FontMetricTable {
    &DEJAVU_SANS_TABLE
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(dejavu_sans_metrics().measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_single_space() {
        let width = dejavu_sans_metrics().measure_str(" ");
        assert!(
            (width - 0.32).abs() < 1e-4,
            "space width should be 0.32, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = dejavu_sans_metrics();
        let width = metrics.measure_str("é");
        assert!(
            (width - metrics.average_char_width).abs() < 1e-4,
            "non-ASCII should use average_char_width"
        );
    }

    #[test]
    fn test_wrap_words_empty_input() {
        let metrics = dejavu_sans_metrics();
        assert!(metrics.wrap_words("", 40.0).is_empty());
        assert!(metrics.wrap_words("   ", 40.0).is_empty());
    }

    #[test]
    fn test_wrap_words_short_line_stays_single() {
        let lines = dejavu_sans_metrics().wrap_words("Backend Engineer", 40.0);
        assert_eq!(lines, vec!["Backend Engineer".to_string()]);
    }

    #[test]
    fn test_wrap_words_long_text_wraps() {
        let text = "word ".repeat(40);
        let lines = dejavu_sans_metrics().wrap_words(&text, 20.0);
        assert!(lines.len() > 1, "expected wrapping, got {} line(s)", lines.len());
        // No content lost and order preserved.
        assert_eq!(lines.join(" "), text.trim());
    }

    #[test]
    fn test_wrap_words_respects_width_budget() {
        let metrics = dejavu_sans_metrics();
        let text = "tailored resume generation for distributed backend systems roles";
        for line in metrics.wrap_words(text, 15.0) {
            // Single overlong words are the only allowed overflow; none here.
            assert!(metrics.measure_str(&line) <= 15.0 + 1e-3, "line too wide: {line}");
        }
    }

    #[test]
    fn test_wrap_words_overlong_word_gets_own_line() {
        let lines = dejavu_sans_metrics().wrap_words("a Supercalifragilisticexpialidocious b", 5.0);
        assert_eq!(
            lines,
            vec![
                "a".to_string(),
                "Supercalifragilisticexpialidocious".to_string(),
                "b".to_string()
            ]
        );
    }

    #[test]
    fn test_page_metrics_defaults_sane() {
        let page = PageMetrics::default();
        assert_eq!(page.text_width_mm(), 180.0);
        let body_em = page.text_width_em(page.body_size_pt);
        assert!(
            body_em > 40.0 && body_em < 45.0,
            "A4 body width should be ~42.5em, got {body_em}"
        );
    }
}
