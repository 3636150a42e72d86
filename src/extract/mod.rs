//! Visible-text extraction from HTML pages

use scraper::{ElementRef, Html, Node};

/// Elements whose text never reaches the reader, or is page chrome rather than
/// content.
const SKIPPED_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "template", "nav", "header", "footer", "aside",
];

/// Extract the visible words of an HTML document, joined by single spaces.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut words: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ElementRef::wrap(ancestor)
                .map(|el| SKIPPED_ELEMENTS.contains(&el.value().name()))
                .unwrap_or(false)
        });
        if hidden {
            continue;
        }

        words.extend(text.split_whitespace());
    }

    words.join(" ")
}

/// Keep at most `max_chars` characters of `text` (hard cut).
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_chrome_and_scripts() {
        let html = r#"<html>
            <head><title>Rust</title><style>body { color: red }</style></head>
            <body>
              <header>Site header</header>
              <nav><a href="/">Home</a></nav>
              <main>
                <h1>Ownership</h1>
                <p>Each value   has
                   an <b>owner</b>.</p>
                <script>var tracking = 1;</script>
              </main>
              <aside>Related links</aside>
              <footer>Copyright</footer>
            </body></html>"#;

        assert_eq!(visible_text(html), "Rust Ownership Each value has an owner .");
    }

    #[test]
    fn test_comments_are_not_text() {
        let html = "<p>before<!-- hidden note -->after</p>";
        assert_eq!(visible_text(html), "before after");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(visible_text(""), "");
        assert_eq!(visible_text("<html><body><script>x()</script></body></html>"), "");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
        // Multi-byte characters count once each
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
    }
}
