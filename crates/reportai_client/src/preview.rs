const TRUNCATED_MARKER: &str = "\n.[truncated]";
pub const MAX_PREVIEW_CONTENT: usize = 40_960;

/// Caps the display preview at `MAX_PREVIEW_CONTENT` bytes, backing off to
/// a char boundary and appending a marker when content was cut.
pub fn prepare_preview(text: &str) -> String {
    if text.len() <= MAX_PREVIEW_CONTENT {
        text.to_string()
    } else {
        let mut end = MAX_PREVIEW_CONTENT;
        while end > 0 && !text.is_char_boundary(end) {
            end -= 1;
        }
        let truncated = &text[..end];
        format!("{truncated}{TRUNCATED_MARKER}")
    }
}

#[cfg(test)]
mod tests {
    use super::{prepare_preview, MAX_PREVIEW_CONTENT};

    #[test]
    fn short_content_kept_as_is() {
        let content = "short preview";
        assert_eq!(prepare_preview(content), content);
    }

    #[test]
    fn truncated_content_appends_marker() {
        let content: String = "a".repeat(MAX_PREVIEW_CONTENT + 128);
        let preview = prepare_preview(&content);
        assert!(preview.ends_with("\n.[truncated]"));
        assert_eq!(preview.len(), MAX_PREVIEW_CONTENT + "\n.[truncated]".len());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let content: String = "é".repeat(MAX_PREVIEW_CONTENT);
        let preview = prepare_preview(&content);
        assert!(preview.ends_with("\n.[truncated]"));
        assert!(preview.strip_suffix("\n.[truncated]").unwrap().chars().all(|c| c == 'é'));
    }
}
