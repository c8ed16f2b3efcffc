use ammonia::Builder;
use maplit::hashset;
use std::sync::OnceLock;

fn get_sanitizer() -> &'static Builder<'static> {
    static SANITIZER: OnceLock<Builder<'static>> = OnceLock::new();
    SANITIZER.get_or_init(build_sanitizer)
}

fn build_sanitizer() -> Builder<'static> {
    let mut sanitizer = Builder::default();

    // 仅保留行内格式标签，其余标签剥离、文本转义
    sanitizer.tags(hashset![
        "a", "b", "strong", "em", "i", "u", "s", "code", "br", "p",
    ]);
    sanitizer.url_schemes(hashset!["http", "https", "mailto"]);
    sanitizer.strip_comments(true);
    sanitizer
}

/// Neutralizes markup in user supplied free text before it is sent to a
/// client. Script and style elements are dropped along with their content,
/// event handler attributes and unknown tags are removed.
pub fn sanitize_text(input: &str) -> String {
    get_sanitizer().clean(input).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize_text("Rust by Example"), "Rust by Example");
        assert_eq!(sanitize_text(""), "");
    }

    #[test]
    fn test_script_removed() {
        let cleaned = sanitize_text("<script>alert(1)</script>hello");
        assert!(!cleaned.contains("<script"));
        assert!(!cleaned.contains("alert(1)"));
        assert_eq!(cleaned, "hello");
    }

    #[test]
    fn test_event_handlers_removed() {
        let cleaned = sanitize_text(r#"<a href="https://example.com" onclick="steal()">x</a>"#);
        assert!(!cleaned.contains("onclick"));
        assert!(cleaned.contains("https://example.com"));

        let cleaned = sanitize_text(r#"<img src="x" onerror="alert(1)">"#);
        assert!(!cleaned.contains("onerror"));
        assert!(!cleaned.contains("<img"));
    }

    #[test]
    fn test_javascript_urls_removed() {
        let cleaned = sanitize_text(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!cleaned.contains("javascript:"));
    }

    #[test]
    fn test_inline_tags_kept_block_tags_stripped() {
        assert_eq!(sanitize_text("<b>bold</b> and <em>em</em>"), "<b>bold</b> and <em>em</em>");
        assert_eq!(sanitize_text("<div><span>text</span></div>"), "text");
        assert_eq!(sanitize_text("<iframe src=\"https://evil.io\"></iframe>ok"), "ok");
    }

    #[test]
    fn test_stray_brackets_escaped() {
        assert_eq!(sanitize_text("1 < 2 & 3"), "1 &lt; 2 &amp; 3");
    }
}
