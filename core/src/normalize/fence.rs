const FENCE: &str = "```";

/// Strips a Markdown code fence.
///
/// Only applies when `text` starts with a fence. The body runs from the first newline to the
/// *last* fence in the text, so language tags and trailing prose after the closing fence are
/// dropped. Returns `text` unchanged when no such body exists.
pub fn strip_fence(text: &str) -> &str {
    if !text.starts_with(FENCE) {
        return text;
    }
    let Some(first_nl) = text.find('\n') else {
        return text;
    };
    let Some(last_fence) = text.rfind(FENCE) else {
        return text;
    };
    if last_fence <= first_nl {
        return text;
    }
    text[first_nl + 1..last_fence].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfenced_passthrough() {
        assert_eq!(strip_fence("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_fence("prose ```json\n{}\n```"), "prose ```json\n{}\n```");
    }

    #[test]
    fn test_language_tag_dropped() {
        assert_eq!(strip_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_trailing_prose_after_close_dropped() {
        assert_eq!(
            strip_fence("```json\n{\"a\":1}\n```\nHope this helps!"),
            "{\"a\":1}"
        );
    }

    #[test]
    fn test_last_fence_wins() {
        // two blocks: the body spans to the final fence, inner markers included
        let text = "```json\n{\"a\":1}\n```\nand\n```json\n{\"b\":2}\n```";
        assert_eq!(
            strip_fence(text),
            "{\"a\":1}\n```\nand\n```json\n{\"b\":2}"
        );
    }

    #[test]
    fn test_unclosed_or_single_line_fence_untouched() {
        assert_eq!(strip_fence("```json"), "```json");
        assert_eq!(strip_fence("```{\"a\":1}```"), "```{\"a\":1}```");
        assert_eq!(strip_fence("```json\n{\"a\":1}"), "```json\n{\"a\":1}");
    }
}
