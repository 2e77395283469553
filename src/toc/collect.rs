use regex::Regex;
use lazy_static::lazy_static;

use crate::toc::types::{Heading, HeadingEvent, Root};

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(
        r#"(?is)<h([1-6])(\s[^>]*)?>(.*?)</h([1-6])\s*>"#
    ).expect("heading pattern is valid");

    static ref ID_REGEX: Regex = Regex::new(
        r#"(?i)(?:^|\s)id\s*=\s*["']([^"']*)["']"#
    ).expect("id pattern is valid");

    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").expect("tag pattern is valid");
}

/// Scan rendered HTML for headings and work out where each one goes.
///
/// A new top-level row starts with the first heading and with every `<h1>`.
/// The level is the heading number minus one, so a page that starts at
/// `<h2>` gets a placeholder parent.
pub fn collect_headings(html: &str) -> Vec<HeadingEvent> {
    let mut events = Vec::new();
    let mut row: Option<usize> = None;

    for cap in HEADING_REGEX.captures_iter(html) {
        if cap[1] != cap[4] {
            continue;
        }

        let number: usize = match cap[1].parse() {
            Ok(n) => n,
            Err(_) => continue,
        };

        let attributes = cap.get(2).map_or("", |m| m.as_str());
        let inner = &cap[3];

        let text = strip_html_tags(inner);
        let id = find_id(attributes)
            .or_else(|| find_id(inner))
            .unwrap_or_else(|| generate_id_from_text(&text));

        let current = match row {
            Some(r) if number == 1 => r + 1,
            Some(r) => r,
            None => 0,
        };
        row = Some(current);

        events.push(HeadingEvent::new(Heading::new(text, id), current, number - 1));
    }

    events
}

/// Build a complete table of contents from HTML
pub fn build_toc_from_html(html: &str) -> Root {
    Root::from_events(collect_headings(html))
}

fn find_id(fragment: &str) -> Option<String> {
    ID_REGEX
        .captures(fragment)
        .map(|cap| cap[1].to_string())
        .filter(|id| !id.is_empty())
}

/// Strip HTML tags from text
fn strip_html_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").trim().to_string()
}

/// Generate an anchor id from heading text
fn generate_id_from_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_headings() {
        let html = r#"
            <h1 id="intro">Introduction</h1>
            <p>Some text</p>
            <h2 id="chapter-1">Chapter <em>1</em></h2>
            <h3 id="section-1-1">Section 1.1</h3>
            <h1 id="usage">Usage</h1>
            <h2 id="chapter-2">Chapter 2</h2>
        "#;

        let events = collect_headings(html);
        let coords: Vec<(&str, &str, usize, usize)> = events
            .iter()
            .map(|e| (e.heading.text.as_str(), e.heading.id.as_str(), e.row, e.level))
            .collect();

        assert_eq!(coords, vec![
            ("Introduction", "intro", 0, 0),
            ("Chapter 1", "chapter-1", 0, 1),
            ("Section 1.1", "section-1-1", 0, 2),
            ("Usage", "usage", 1, 0),
            ("Chapter 2", "chapter-2", 1, 1),
        ]);
    }

    #[test]
    fn test_page_without_h1() {
        let html = "<h2 id=\"a\">A</h2><h3 id=\"b\">B</h3><h2 id=\"c\">C</h2>";
        let events = collect_headings(html);

        assert!(events.iter().all(|e| e.row == 0));
        let toc = build_toc_from_html(html);
        assert_eq!(toc.nodes.len(), 1);
        assert!(toc.nodes[0].is_placeholder());
        assert_eq!(toc.nodes[0].children.len(), 2);
    }

    #[test]
    fn test_id_from_inner_anchor() {
        let html = r##"<h2><a href="#getting-started" aria-hidden="true" class="anchor" id="getting-started"></a>Getting Started</h2>"##;
        let events = collect_headings(html);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].heading, Heading::new("Getting Started", "getting-started"));
    }

    #[test]
    fn test_hyphenated_id_attributes_are_ignored() {
        let events = collect_headings("<h2 data-id=\"wrong\" id=\"right\">Title</h2>");
        assert_eq!(events[0].heading.id, "right");

        let events = collect_headings("<h2 aria-id=\"nope\">Only Data</h2>");
        assert_eq!(events[0].heading.id, "only-data");
    }

    #[test]
    fn test_generated_id() {
        assert_eq!(generate_id_from_text("Hello, World!"), "hello-world");
        assert_eq!(generate_id_from_text("snake_case  here"), "snake_case-here");

        let events = collect_headings("<h1>Plain Title</h1>");
        assert_eq!(events[0].heading.id, "plain-title");
    }

    #[test]
    fn test_mismatched_tags_are_skipped() {
        let events = collect_headings("<h2 id=\"x\">Broken</h3><h2 id=\"y\">Fine</h2>");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].heading.id, "y");
    }
}
