//! Main-content selection from raw HTML
//!
//! Finds the most likely article container by trying a fixed list of
//! selectors in priority order, then collects its text while skipping
//! boilerplate subtrees. Pure functions over HTML; no network involved.

use scraper::node::Element;
use scraper::{ElementRef, Html, Node, Selector};

/// Container selectors, most specific first. The first one that matches
/// wins; `body` is the fallback when none do.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    ".main-content",
    ".story-body",
    ".article-body",
    "#content",
    "#main",
    "#story",
];

/// Elements whose subtrees never carry article prose
const NOISE_TAGS: &[&str] = &[
    "script", "style", "noscript", "header", "footer", "nav", "aside",
];

/// Class names marking boilerplate blocks inside the content container
const NOISE_CLASSES: &[&str] = &["sidebar", "comments", "related-posts", "ad-container"];

/// Extract the cleaned article text from an HTML document
///
/// Returns the collapsed text of the best-matching content container, or an
/// empty string when the document has no text at all.
pub fn extract_main_text(html: &str) -> String {
    let document = Html::parse_document(html);

    for selector_str in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(container) = document.select(&selector).next() {
            let text = container_text(container);
            if !text.is_empty() {
                return text;
            }
        }
    }

    // No recognized container; fall back to the whole body.
    if let Ok(body) = Selector::parse("body") {
        if let Some(container) = document.select(&body).next() {
            return container_text(container);
        }
    }

    String::new()
}

/// Collect and collapse the visible text of one container element
fn container_text(container: ElementRef<'_>) -> String {
    let mut raw = String::new();
    for child in container.children() {
        collect_text(child, &mut raw);
    }
    collapse_whitespace(&raw)
}

fn collect_text(node: ego_tree::NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => {
            out.push_str(text);
            out.push(' ');
        }
        Node::Element(element) => {
            if is_noise(element) {
                return;
            }
            for child in node.children() {
                collect_text(child, out);
            }
        }
        _ => {}
    }
}

fn is_noise(element: &Element) -> bool {
    if NOISE_TAGS.contains(&element.name()) {
        return true;
    }
    element
        .classes()
        .any(|class| NOISE_CLASSES.contains(&class))
}

/// Collapse all runs of whitespace (including newlines) to single spaces
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_article_over_body() {
        let html = r#"
            <html><body>
                <div>navigation cruft</div>
                <article><p>The actual story text.</p></article>
            </body></html>
        "#;
        assert_eq!(extract_main_text(html), "The actual story text.");
    }

    #[test]
    fn test_selector_priority_order() {
        // Both match; article outranks .main-content.
        let html = r#"
            <body>
                <div class="main-content">secondary</div>
                <article>primary</article>
            </body>
        "#;
        assert_eq!(extract_main_text(html), "primary");
    }

    #[test]
    fn test_strips_script_and_nav() {
        let html = r#"
            <article>
                <script>var x = 1;</script>
                <nav>Home | About</nav>
                <p>Visible paragraph.</p>
            </article>
        "#;
        assert_eq!(extract_main_text(html), "Visible paragraph.");
    }

    #[test]
    fn test_strips_noise_classes() {
        let html = r#"
            <article>
                <p>Keep this.</p>
                <div class="sidebar">skip this</div>
                <div class="related-posts">and this</div>
            </article>
        "#;
        assert_eq!(extract_main_text(html), "Keep this.");
    }

    #[test]
    fn test_falls_back_to_body() {
        let html = "<html><body><p>Plain page text.</p></body></html>";
        assert_eq!(extract_main_text(html), "Plain page text.");
    }

    #[test]
    fn test_collapses_whitespace() {
        let html = "<article><p>one\n\n   two</p>\n<p>three</p></article>";
        assert_eq!(extract_main_text(html), "one two three");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_main_text("<html><body></body></html>"), "");
    }
}
