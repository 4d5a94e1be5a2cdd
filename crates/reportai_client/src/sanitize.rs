use scraper::{ElementRef, Html};

const DROPPED_TAGS: &[&str] = &["script", "style", "head", "noscript", "template", "iframe"];

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "header", "footer", "h1", "h2", "h3", "h4", "h5", "h6",
    "li", "ul", "ol", "table", "tr", "pre", "blockquote", "br", "hr",
];

/// Projects report HTML onto plain text. Dropped tags disappear entirely
/// (including their text), block elements are separated by blank lines and
/// everything else contributes only its text content, so the result
/// carries no markup the UI could ever interpret.
pub fn sanitize_report(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut raw = String::new();
    collect_text(doc.root_element(), &mut raw);
    normalize_blank_lines(&raw)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    let tag = element.value().name();
    if DROPPED_TAGS.contains(&tag) {
        return;
    }

    let block = BLOCK_TAGS.contains(&tag);
    if block {
        out.push('\n');
    }
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            collect_text(child_element, out);
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
    if block {
        out.push('\n');
    }
}

fn normalize_blank_lines(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = 0usize;
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            blank_run += 1;
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if blank_run > 0 {
                out.push('\n');
            }
        }
        out.push_str(line);
        blank_run = 0;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::sanitize_report;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(sanitize_report("hello world"), "hello world");
    }

    #[test]
    fn script_and_style_are_dropped_entirely() {
        let html = "<html><head><style>p{color:red}</style></head>\
                    <body><p>visible</p><script>alert('x')</script></body></html>";
        assert_eq!(sanitize_report(html), "visible");
    }

    #[test]
    fn block_elements_are_separated_by_blank_lines() {
        let html = "<body><h1>Title</h1><p>first</p><p>second</p></body>";
        assert_eq!(sanitize_report(html), "Title\n\nfirst\n\nsecond");
    }

    #[test]
    fn inline_markup_keeps_text_only() {
        let html = "<p>a <strong>bold</strong> claim</p>";
        assert_eq!(sanitize_report(html), "a bold claim");
    }

    #[test]
    fn event_handlers_and_attributes_leave_no_trace() {
        let html = r#"<p onclick="evil()" data-x="1">hi</p>"#;
        assert_eq!(sanitize_report(html), "hi");
    }
}
