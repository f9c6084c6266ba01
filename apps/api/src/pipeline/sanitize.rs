//! Output sanitization: strips internal reasoning markup from model output.
//!
//! Reasoning-tuned models (DeepSeek R1 distills and friends) emit their
//! deliberation inside `<think>…</think>` spans. None of that belongs in a
//! document handed to a hiring manager, so every well-formed span is removed
//! before the text reaches the renderer or the response payload.

use std::sync::OnceLock;

use regex::Regex;

static THINK_SPAN: OnceLock<Regex> = OnceLock::new();

/// Removes every `<think>…</think>` span (delimiters included) from `text`.
///
/// Matching is non-greedy and crosses line boundaries, so multiple spans and
/// multi-line spans are each removed exactly. All other content is preserved
/// byte-for-byte, which makes the function idempotent: sanitizing
/// already-clean text returns it unchanged. An unpaired `<think>` with no
/// closing tag is left as-is rather than eating the rest of the document.
pub fn sanitize(text: &str) -> String {
    let re = THINK_SPAN
        .get_or_init(|| Regex::new(r"(?s)<think>.*?</think>").expect("think-span regex is valid"));
    re.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_single_span() {
        let input = "Hello <think>internal deliberation</think>world";
        assert_eq!(sanitize(input), "Hello world");
    }

    #[test]
    fn test_removes_multiple_spans() {
        let input = "<think>a</think>one<think>b</think>two<think>c</think>";
        assert_eq!(sanitize(input), "onetwo");
    }

    #[test]
    fn test_removes_multiline_span() {
        let input = "# Resume\n<think>\nline one\nline two\n</think>\nSUMMARY";
        assert_eq!(sanitize(input), "# Resume\n\nSUMMARY");
    }

    #[test]
    fn test_clean_text_unchanged() {
        let input = "NAME: Jane Doe\nSUMMARY: backend engineer with 5 years.";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_idempotent() {
        let input = "start<think>one</think>middle<think>\ntwo\n</think>end";
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_unpaired_open_tag_left_alone() {
        let input = "before <think>never closed";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_non_greedy_between_spans() {
        // A greedy match would swallow the "keep" in the middle.
        let input = "<think>a</think>keep<think>b</think>";
        assert_eq!(sanitize(input), "keep");
    }

    #[test]
    fn test_preserves_surrounding_bytes_in_order() {
        let input = "αβγ<think>δ</think>éñ 🎯";
        assert_eq!(sanitize(input), "αβγéñ 🎯");
    }
}
