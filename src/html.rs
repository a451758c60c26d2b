use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text never reaches the reader.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Concatenated text of the page `<body>`, without separators between nodes.
///
/// Falls back to the whole document when there is no body element.
pub fn extract_body_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let body = Selector::parse("body")
        .ok()
        .and_then(|sel| document.select(&sel).next());

    let mut out = String::new();
    collect_text(body.unwrap_or_else(|| document.root_element()), &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if SKIPPED_ELEMENTS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_text_only() {
        let html = "<html><head><title>Title</title></head><body><p>Hello</p><p>World</p></body></html>";
        assert_eq!(extract_body_text(html), "HelloWorld");
    }

    #[test]
    fn scripts_and_styles_skipped() {
        let html = "<body><p>keep</p><script>var x = 1;</script><style>p { color: red }</style><noscript>enable js</noscript><p>this</p></body>";
        assert_eq!(extract_body_text(html), "keepthis");
    }

    #[test]
    fn nested_text_in_order() {
        let html = "<body><div>a<span>b<em>c</em></span>d</div></body>";
        assert_eq!(extract_body_text(html), "abcd");
    }

    #[test]
    fn fragment_without_body_tag() {
        assert_eq!(extract_body_text("plain <b>text</b>"), "plain text");
    }

    #[test]
    fn empty_document() {
        assert_eq!(extract_body_text(""), "");
    }

    #[test]
    fn chinese_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/park.html").unwrap();
        let text = extract_body_text(&html);
        assert!(text.contains("公园"));
        assert!(!text.contains("function"));
        assert!(!text.contains("周末去哪儿"), "title leaked: {}", text);
    }
}
